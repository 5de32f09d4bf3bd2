pub mod chatbot_route;
pub mod default_route;
