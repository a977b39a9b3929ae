use std::fmt;

use crate::models::BitMatrix;

/// State of a single QR module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Module {
    /// Not assigned yet; data placement may write here
    #[default]
    Unset,
    /// Dark module
    Black,
    /// Light module
    White,
}

impl Module {
    /// Module color for a bit (true = black)
    pub fn from_bit(bit: bool) -> Self {
        if bit { Module::Black } else { Module::White }
    }

    /// True while the module has not been claimed by a pattern or data bit
    pub fn is_writable(self) -> bool {
        self == Module::Unset
    }

    /// True for black modules only (unset reads as light)
    pub fn is_dark(self) -> bool {
        self == Module::Black
    }
}

/// Square grid of modules, addressed as (x = column, y = row)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    size: usize,
    modules: Vec<Module>,
}

impl ModuleGrid {
    /// Create an all-unset grid with the given side length
    pub fn new(size: usize) -> Self {
        Self {
            size,
            modules: vec![Module::Unset; size * size],
        }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get module at (x, y). Out-of-range coordinates read as unset.
    pub fn get(&self, x: usize, y: usize) -> Module {
        if x >= self.size || y >= self.size {
            return Module::Unset;
        }
        self.modules[y * self.size + x]
    }

    /// Set module at (x, y). Out-of-range writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, module: Module) {
        if x >= self.size || y >= self.size {
            return;
        }
        self.modules[y * self.size + x] = module;
    }

    /// Shorthand for `get(x, y).is_dark()`
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_dark()
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Module]> {
        // chunks(0) panics, so an empty grid yields nothing
        self.modules.chunks(self.size.max(1))
    }

    /// Number of modules still unset
    pub fn unset_count(&self) -> usize {
        self.modules.iter().filter(|m| m.is_writable()).count()
    }

    /// Number of black modules
    pub fn dark_count(&self) -> usize {
        self.modules.iter().filter(|m| m.is_dark()).count()
    }

    /// Collapse to a dark/light bit matrix; unset modules become light
    pub fn to_bit_matrix(&self) -> BitMatrix {
        let mut matrix = BitMatrix::new(self.size);
        for (y, row) in self.rows().enumerate() {
            for (x, module) in row.iter().enumerate() {
                matrix.set(x, y, module.is_dark());
            }
        }
        matrix
    }
}

impl fmt::Display for ModuleGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for module in row {
                let cell = match module {
                    Module::Black => "##",
                    Module::White => "  ",
                    Module::Unset => "..",
                };
                f.write_str(cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
