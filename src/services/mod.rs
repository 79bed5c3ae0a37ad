pub mod catalog;
pub mod responder;
pub mod routing;
