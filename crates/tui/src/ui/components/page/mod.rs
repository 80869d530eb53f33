//! The one-page document: scroll state, section renderers, and the
//! testimonial carousel.

mod carousel;
mod page_component;
mod sections;
mod state;

pub use carousel::CarouselState;
pub use page_component::PageComponent;
pub use state::PageState;
