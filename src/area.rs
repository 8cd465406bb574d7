pub mod model;
pub mod parser;
pub mod store;
pub use model::Area;
pub use model::AreaCollection;
pub use model::OverlayHandle;
pub use parser::parse;
pub use store::AreaStore;
