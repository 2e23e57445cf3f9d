pub mod html;
pub mod layout;
pub mod projection;
pub mod text;
pub mod vdom;

#[cfg(test)]
mod tests_projection;

pub use html::{render_fragment, render_page, RenderOptions};
pub use layout::{SectionId, SectionLayout, UnknownSection};
pub use projection::{project, NAME_PLACEHOLDER, TITLE_PLACEHOLDER};
pub use text::{display_link, parse_description, tokenize_skills, DescriptionBlock, BULLET};
pub use vdom::{PreviewDocument, PreviewSection, VNode};
