// page banners
pub mod header;
pub mod footer;
