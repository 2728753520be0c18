// Vendor listings (artists and venues)

pub mod data;
pub mod models;

pub use data::{CreateVendorInput, UpdateVendorInput, VendorData, VendorMediaData};
pub use models::{Vendor, VendorMedia, VendorStatus};
