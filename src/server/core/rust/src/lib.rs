/* src/server/core/rust/src/lib.rs */

pub mod context;
pub mod errors;
pub mod model;
pub mod page;
pub mod postedit;
pub mod resolve;
pub mod route;
pub mod server;
pub mod widget;

// Re-exports for ergonomic use
pub use context::{PageContext, PageUrl, RequestContext, parse_query};
pub use errors::PageError;
pub use model::PageModel;
pub use page::{PageController, PageDef};
pub use postedit::PostEditModelBuilder;
pub use resolve::{I18nConfig, LOCALE_COOKIE, ResolveContext, default_resolve};
pub use route::{RoutePattern, split_url};
pub use server::{POST_EDIT_PAGE, PageServer, RequestParts};
pub use widget::{
  BLOG_CONTAINER_ID, BLOG_POST_EDIT_WIDGET, EditorConfig, PostEditOptions, WidgetDescriptor,
  language_code,
};
