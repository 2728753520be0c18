// Authentication: JWT issuing and verification

pub mod jwt;

pub use jwt::{Claims, JwtService};
