pub mod vendor;
pub mod vendor_media;

pub use vendor::{Vendor, VendorStatus};
pub use vendor_media::VendorMedia;
