use depsnap::prelude::*;
use std::path::Path;

/// Mock ImportScanner returning a fixed list of surface-level imports
#[derive(Default, Clone)]
pub struct MockImportScanner {
    imports: Vec<String>,
}

impl MockImportScanner {
    pub fn new(imports: Vec<&str>) -> Self {
        Self {
            imports: imports.into_iter().map(String::from).collect(),
        }
    }
}

impl ImportScanner for MockImportScanner {
    fn surface_imports(&self, _folder: &Path) -> Result<Vec<String>> {
        Ok(self.imports.clone())
    }
}
