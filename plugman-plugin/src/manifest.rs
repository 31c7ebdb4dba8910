//! The host application's plugin manifest (`plugins.xml`).
//!
//! The document is flat: a single root element whose children each carry an
//! absolute `name` path pointing at a plugin entry file. Loading keeps every
//! attribute of the root and of existing children verbatim, so a merge only
//! ever appends. De-duplication compares entry file names, not full paths;
//! an entry whose file name is already registered is skipped even when it
//! belongs to a different plugin.

use std::fs;
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};
use tracing::debug;

use plugman_core::error::{PlugmanError, Result};

/// Element name of a plugin registration.
const ENTRY_ELEMENT: &str = "Plugin";

/// Attribute holding the absolute entry-file path.
const NAME_ATTR: &str = "name";

/// Root element name used when synthesizing a new manifest.
const ROOT_ELEMENT: &str = "Plugins";

/// Root attribute set on a freshly created manifest.
const LOG_FOLDER_ATTR: &str = "logFolder";

#[derive(Debug, Clone)]
pub struct Manifest {
    root_name: String,
    root_attrs: Vec<(String, String)>,
    entries: Vec<ManifestEntry>,
}

/// One child element of the manifest root, attributes kept in document order.
#[derive(Debug, Clone)]
pub struct ManifestEntry {
    element: String,
    attrs: Vec<(String, String)>,
}

impl ManifestEntry {
    /// The `name` attribute of a `Plugin` registration, when present.
    pub fn entry_path(&self) -> Option<&str> {
        if self.element != ENTRY_ELEMENT {
            return None;
        }
        self.attrs
            .iter()
            .find(|(key, _)| key == NAME_ATTR)
            .map(|(_, value)| value.as_str())
    }
}

impl Manifest {
    /// A fresh document: `<Plugins logFolder="...">` with no registrations.
    pub fn new_default(log_folder: &str) -> Self {
        Self {
            root_name: ROOT_ELEMENT.to_string(),
            root_attrs: vec![(LOG_FOLDER_ATTR.to_string(), log_folder.to_string())],
            entries: Vec::new(),
        }
    }

    /// Parses an existing manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    fn parse(contents: &str) -> Result<Self> {
        let mut reader = Reader::from_str(contents);

        let mut root: Option<(String, Vec<(String, String)>)> = None;
        let mut entries = Vec::new();
        let mut depth = 0usize;

        loop {
            match reader.read_event()? {
                Event::Start(element) => {
                    if depth == 0 {
                        root = Some(decompose(&element)?);
                    } else if depth == 1 {
                        let (name, attrs) = decompose(&element)?;
                        entries.push(ManifestEntry {
                            element: name,
                            attrs,
                        });
                    }
                    depth += 1;
                }
                Event::Empty(element) => {
                    if depth == 0 {
                        root = Some(decompose(&element)?);
                    } else if depth == 1 {
                        let (name, attrs) = decompose(&element)?;
                        entries.push(ManifestEntry {
                            element: name,
                            attrs,
                        });
                    }
                }
                Event::End(_) => {
                    depth = depth.saturating_sub(1);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        let (root_name, root_attrs) =
            root.ok_or_else(|| PlugmanError::Manifest("document has no root element".into()))?;

        Ok(Self {
            root_name,
            root_attrs,
            entries,
        })
    }

    /// True when some registration's `name` attribute has this file name as
    /// its final path component. Comparison is by file name only.
    pub fn contains_entry_file(&self, file_name: &str) -> bool {
        self.entries
            .iter()
            .filter_map(ManifestEntry::entry_path)
            .any(|registered| file_name_of(registered) == file_name)
    }

    /// Appends a registration for `entry_path` unless an entry with the same
    /// file name already exists. Returns whether an entry was appended.
    pub fn register(&mut self, entry_path: &Path) -> bool {
        let file_name = match entry_path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => return false,
        };

        if self.contains_entry_file(&file_name) {
            debug!(file = %file_name, "entry file already registered, skipping");
            return false;
        }

        self.entries.push(ManifestEntry {
            element: ENTRY_ELEMENT.to_string(),
            attrs: vec![(NAME_ATTR.to_string(), entry_path.display().to_string())],
        });
        true
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn root_attr(&self, key: &str) -> Option<&str> {
        self.root_attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value.as_str())
    }

    /// Writes the document in place: UTF-8, XML declaration, indented.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

        let mut root = BytesStart::new(self.root_name.as_str());
        for (key, value) in &self.root_attrs {
            root.push_attribute((key.as_str(), value.as_str()));
        }
        writer.write_event(Event::Start(root))?;

        for entry in &self.entries {
            let mut element = BytesStart::new(entry.element.as_str());
            for (key, value) in &entry.attrs {
                element.push_attribute((key.as_str(), value.as_str()));
            }
            writer.write_event(Event::Empty(element))?;
        }

        writer.write_event(Event::End(BytesEnd::new(self.root_name.as_str())))?;

        fs::write(path, writer.into_inner())?;
        Ok(())
    }
}

/// Final path component of a registered value. Existing manifests may use
/// either separator convention, so both are honored.
fn file_name_of(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

fn decompose(element: &BytesStart) -> Result<(String, Vec<(String, String)>)> {
    let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();

    let mut attrs = Vec::new();
    for attribute in element.attributes() {
        let attribute = attribute.map_err(|e| PlugmanError::Manifest(e.to_string()))?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|e| PlugmanError::Manifest(e.to_string()))?
            .into_owned();
        attrs.push((key, value));
    }

    Ok((name, attrs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Plugins logFolder="Library3D" schema="2">
  <Plugin name="C:\Host\bin\Plugins\alpha\alpha.dll" rev="7" />
  <Plugin name="C:\Host\bin\Plugins\beta\bin\beta.dll" />
</Plugins>"#;

    #[test]
    fn default_document_carries_the_log_folder_attribute() {
        let manifest = Manifest::new_default("Library3D");
        assert_eq!(manifest.root_attr("logFolder"), Some("Library3D"));
        assert!(manifest.entries().is_empty());
    }

    #[test]
    fn parse_keeps_root_attributes_and_entry_order() -> Result<()> {
        let manifest = Manifest::parse(SAMPLE)?;

        assert_eq!(manifest.root_attr("logFolder"), Some("Library3D"));
        assert_eq!(manifest.root_attr("schema"), Some("2"));
        assert_eq!(manifest.entries().len(), 2);
        assert_eq!(
            manifest.entries()[0].entry_path(),
            Some(r"C:\Host\bin\Plugins\alpha\alpha.dll")
        );
        Ok(())
    }

    #[test]
    fn dedup_is_by_file_name_not_full_path() -> Result<()> {
        let manifest = Manifest::parse(SAMPLE)?;

        assert!(manifest.contains_entry_file("alpha.dll"));
        assert!(manifest.contains_entry_file("beta.dll"));
        assert!(!manifest.contains_entry_file("gamma.dll"));
        Ok(())
    }

    #[test]
    fn register_skips_a_duplicate_file_name_from_another_plugin() -> Result<()> {
        let mut manifest = Manifest::parse(SAMPLE)?;

        let appended = manifest.register(Path::new("/target/Plugins/other/alpha.dll"));
        assert!(!appended);
        assert_eq!(manifest.entries().len(), 2);

        let appended = manifest.register(Path::new("/target/Plugins/gamma/gamma.dll"));
        assert!(appended);
        assert_eq!(manifest.entries().len(), 3);
        Ok(())
    }

    #[test]
    fn save_then_load_preserves_existing_entries() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("plugins.xml");

        let mut manifest = Manifest::parse(SAMPLE)?;
        manifest.register(Path::new("/target/Plugins/gamma/gamma.dll"));
        manifest.save(&path)?;

        let reloaded = Manifest::load(&path)?;
        assert_eq!(reloaded.root_attr("logFolder"), Some("Library3D"));
        assert_eq!(reloaded.root_attr("schema"), Some("2"));
        assert_eq!(reloaded.entries().len(), 3);
        assert_eq!(
            reloaded.entries()[0].entry_path(),
            Some(r"C:\Host\bin\Plugins\alpha\alpha.dll")
        );
        assert_eq!(
            reloaded.entries()[0].attrs,
            vec![
                ("name".to_string(), r"C:\Host\bin\Plugins\alpha\alpha.dll".to_string()),
                ("rev".to_string(), "7".to_string()),
            ]
        );
        Ok(())
    }

    #[test]
    fn saved_document_has_a_declaration_and_self_closed_entries() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("plugins.xml");

        let mut manifest = Manifest::new_default("Library3D");
        manifest.register(Path::new("/target/Plugins/alpha/alpha.dll"));
        manifest.save(&path)?;

        let written = fs::read_to_string(&path)?;
        assert!(written.starts_with(r#"<?xml version="1.0" encoding="utf-8"?>"#));
        assert!(written.contains(r#"<Plugins logFolder="Library3D">"#));
        assert!(written.contains(r#"<Plugin name="/target/Plugins/alpha/alpha.dll"/>"#));
        assert!(written.trim_end().ends_with("</Plugins>"));
        Ok(())
    }

    #[test]
    fn malformed_xml_is_a_manifest_error() {
        let err = Manifest::parse("<Plugins><Plugin</Plugins>").expect_err("bad xml");
        assert!(matches!(err, PlugmanError::Manifest(_)));
    }

    #[test]
    fn empty_document_is_a_manifest_error() {
        assert!(matches!(
            Manifest::parse(""),
            Err(PlugmanError::Manifest(_))
        ));
    }
}
