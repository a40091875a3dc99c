pub mod beck;
pub mod hads;
pub mod prikhozhan;
pub mod spielberger;
