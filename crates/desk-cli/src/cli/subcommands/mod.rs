pub mod auth;
pub mod product;
pub mod template;
pub mod track;

pub use auth::AuthCommands;
pub use product::{ProductCommands, ProductCreateArgs, ProductUpdateArgs};
pub use template::{TemplateBodyArgs, TemplateCommands, TemplateCreateArgs, TemplateUpdateArgs};
pub use track::TrackCommands;
