pub mod chrome;
pub mod gpu;
pub mod quad;
pub mod render_state;

pub use chrome::{build_chrome_quads, ChromeColors};
pub use gpu::{GpuContext, RendererError};
pub use quad::{QuadInstance, QuadRenderer};
pub use render_state::RenderState;
