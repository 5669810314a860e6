pub mod color;
pub mod compositor;
pub mod consts;
pub mod controls;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod lens;
pub mod loader;
pub mod render_loop;
pub mod session;
pub mod settings;
pub mod store;
pub mod surface;
