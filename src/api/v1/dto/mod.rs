pub mod authorizer_event;
