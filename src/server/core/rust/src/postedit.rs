/* src/server/core/rust/src/postedit.rs */

use tracing::debug;

use crate::context::RequestContext;
use crate::model::PageModel;
use crate::page::PageController;
use crate::widget::{
  BLOG_CONTAINER_ID, BLOG_POST_EDIT_WIDGET, EditorConfig, PostEditOptions, WidgetDescriptor,
};

/// Builds the blog post editor widget for the create/edit post page.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostEditModelBuilder;

impl PostEditModelBuilder {
  /// Derive the descriptor from `ctx`, append it to `model`, and return a copy.
  ///
  /// `editMode` checks whether `postId` is present at all, so `?postId=` still
  /// opens the editor in edit mode with an empty id.
  pub fn build(&self, ctx: &RequestContext, model: &mut PageModel) -> WidgetDescriptor {
    let url = &ctx.page.url;
    let post_id = url.arg("postId");

    let descriptor = WidgetDescriptor {
      name: BLOG_POST_EDIT_WIDGET.to_string(),
      options: PostEditOptions {
        site_id: url.template_arg("site").unwrap_or_default().to_string(),
        container_id: BLOG_CONTAINER_ID.to_string(),
        edit_mode: post_id.is_some(),
        post_id: post_id.unwrap_or_default().to_string(),
        editor_config: EditorConfig::for_locale(&ctx.locale),
      },
    };

    debug!(
      site = %descriptor.options.site_id,
      post_id = %descriptor.options.post_id,
      edit_mode = descriptor.options.edit_mode,
      "appending {}",
      descriptor.name
    );
    model.push(descriptor.clone());
    descriptor
  }
}

impl PageController for PostEditModelBuilder {
  fn build(&self, ctx: &RequestContext, model: &mut PageModel) {
    PostEditModelBuilder::build(self, ctx, model);
  }
}
