pub mod artwork;

pub use artwork::{ARTWORK_FIELDS, Artwork, Category, IIIF_PREVIEW_SIZE, Pagination, image_url};
