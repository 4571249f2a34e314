//! JSON-array file backing.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::traits::Backing;
use crate::domain::Product;
use crate::error::Result;

/// Stores the collection as a single JSON array in one file.
#[derive(Debug, Clone)]
pub struct JsonFileBacking {
    path: PathBuf,
    pretty: bool,
}

impl JsonFileBacking {
    /// Create a pretty-printing backing for the given path. Nothing is touched on disk yet.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            pretty: true,
        }
    }

    /// Toggle 2-space indented output.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Backing for JsonFileBacking {
    fn read(&self) -> Result<Vec<Product>> {
        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let products = serde_json::from_reader(reader)?;
        Ok(products)
    }

    fn write(&self, products: &[Product]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, products)?;
        } else {
            serde_json::to_writer(&mut writer, products)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample(id: u64, code: &str) -> Product {
        Product {
            id,
            title: "Samsung Z flip".to_string(),
            description: "Folding phone".to_string(),
            price: 450000.0,
            thumbnail: "ruta/imagen1.jpg".to_string(),
            code: code.to_string(),
            stock: 5,
        }
    }

    #[test]
    fn test_read_missing_file() {
        let temp = TempDir::new().unwrap();
        let backing = JsonFileBacking::new(temp.path().join("absent.json"));
        let err = backing.read().unwrap_err();
        assert!(err.is_missing_file());
    }

    #[test]
    fn test_read_malformed_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        fs::write(&path, "[{\"id\": 0,").unwrap();

        let err = JsonFileBacking::new(&path).read().unwrap_err();
        assert!(!err.is_missing_file());
    }

    #[test]
    fn test_write_then_read() {
        let temp = TempDir::new().unwrap();
        let backing = JsonFileBacking::new(temp.path().join("products.json"));
        let products = vec![sample(0, "PROD001"), sample(1, "PROD002")];

        backing.write(&products).unwrap();
        assert_eq!(backing.read().unwrap(), products);
    }

    #[test]
    fn test_write_replaces_contents() {
        let temp = TempDir::new().unwrap();
        let backing = JsonFileBacking::new(temp.path().join("products.json"));

        backing.write(&[sample(0, "A"), sample(1, "B")]).unwrap();
        backing.write(&[sample(1, "B")]).unwrap();

        let read = backing.read().unwrap();
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].code, "B");
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("products.json");
        let backing = JsonFileBacking::new(&path);

        backing.write(&[]).unwrap();
        assert!(path.exists());
        assert!(backing.read().unwrap().is_empty());
    }

    #[test]
    fn test_pretty_output_is_indented() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("products.json");
        JsonFileBacking::new(&path).write(&[sample(0, "A")]).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  {"));
    }

    #[test]
    fn test_compact_output() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("products.json");
        JsonFileBacking::new(&path)
            .with_pretty(false)
            .write(&[sample(0, "A")])
            .unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_reads_integer_prices() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("products.json");
        fs::write(
            &path,
            r#"[{"id": 4, "title": "t", "description": "d", "price": 420000,
                "thumbnail": "x", "code": "P", "stock": 3}]"#,
        )
        .unwrap();

        let read = JsonFileBacking::new(&path).read().unwrap();
        assert_eq!(read[0].id, 4);
        assert_eq!(read[0].price, 420000.0);
    }
}
