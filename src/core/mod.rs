pub mod camera;
pub mod contact;
pub mod nav;
pub mod scene;

pub use camera::*;
pub use contact::*;
pub use nav::*;
pub use scene::*;
