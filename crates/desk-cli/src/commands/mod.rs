pub mod auth;
pub mod configure;
pub mod dispatch;
pub mod feed;
pub mod product;
pub mod shared;
pub mod template;
pub mod track;
