mod loading_boundary;
mod page_container;

pub use loading_boundary::LoadingBoundary;
pub use page_container::PageContainer;
