pub mod surface;
pub mod surface_cairo;
pub mod surface_recording;
