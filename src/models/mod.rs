pub mod bit_matrix;
pub mod module_grid;
pub mod qr_code;

pub use bit_matrix::BitMatrix;
pub use module_grid::{Module, ModuleGrid};
pub use qr_code::{ECLevel, MaskPattern, QrSymbol, Version};
