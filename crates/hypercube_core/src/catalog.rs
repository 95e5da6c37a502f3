//! Predefined shape catalog
//!
//! A [`Catalog`] is a named list of shape groups that can be switched on and
//! off for display. Catalogs are plain data: they serialize to and from RON
//! and are turned into live [`Shape`]s by [`CatalogEntry::build`].

use std::fs;
use std::path::Path;

use hypercube_math::{Projection, Vec4};
use serde::{Serialize, Deserialize};

use crate::{CatalogError, Color, Shape, ShapeError, ShapeOptions};

/// Grouping used when presenting the catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CatalogKind {
    /// Unit shapes with a corner at the origin
    Normal,
    /// Unit shapes centred on the origin
    Center,
    /// Several shapes forming one structure
    MultiStructure,
}

/// Parameters for one shape in an entry
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShapeInstance {
    pub dimension: u32,
    #[serde(default)]
    pub options: ShapeOptions,
}

impl ShapeInstance {
    pub fn new(dimension: u32, options: ShapeOptions) -> Self {
        Self { dimension, options }
    }

    pub fn build(&self) -> Result<Shape, ShapeError> {
        Shape::new(self.dimension, self.options)
    }
}

/// A named group of shapes
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub kind: CatalogKind,
    #[serde(default)]
    pub description: String,
    /// Whether the entry is drawn at start-up
    #[serde(default)]
    pub visible: bool,
    pub instances: Vec<ShapeInstance>,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, kind: CatalogKind, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            description: description.into(),
            visible: false,
            instances: Vec::new(),
        }
    }

    pub fn with_instance(mut self, dimension: u32, options: ShapeOptions) -> Self {
        self.instances.push(ShapeInstance::new(dimension, options));
        self
    }

    pub fn with_instances(mut self, instances: impl IntoIterator<Item = ShapeInstance>) -> Self {
        self.instances.extend(instances);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Build every shape of the entry; fails on the first shape that fails
    pub fn build(&self) -> Result<Vec<Shape>, ShapeError> {
        self.instances.iter().map(ShapeInstance::build).collect()
    }
}

/// A serializable list of catalog entries
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path)?;
        Self::from_ron(&contents)
    }

    /// Parse a catalog from RON text
    pub fn from_ron(text: &str) -> Result<Self, CatalogError> {
        Ok(ron::from_str(text)?)
    }

    /// Save the catalog to a RON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), CatalogError> {
        fs::write(path, self.to_ron()?)?;
        Ok(())
    }

    /// Pretty-printed RON
    pub fn to_ron(&self) -> Result<String, CatalogError> {
        let pretty = ron::ser::PrettyConfig::new()
            .struct_names(true)
            .enumerate_arrays(false);
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    pub fn add(&mut self, entry: CatalogEntry) {
        self.entries.push(entry);
    }

    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Set an entry's visibility; false if no entry has that name
    pub fn set_visible(&mut self, name: &str, visible: bool) -> bool {
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => {
                entry.visible = visible;
                true
            }
            None => false,
        }
    }

    /// Use `projection` for every shape instance in the catalog
    pub fn apply_projection(&mut self, projection: Projection) {
        for instance in self.entries.iter_mut().flat_map(|e| e.instances.iter_mut()) {
            instance.options.projection = projection;
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn visible_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().filter(|e| e.visible).map(|e| e.name.as_str())
    }

    /// Entry names grouped by kind, in catalog order within each group
    pub fn names_by_kind(&self) -> Vec<(CatalogKind, Vec<&str>)> {
        let mut groups: Vec<(CatalogKind, Vec<&str>)> = Vec::new();
        for entry in &self.entries {
            match groups.iter_mut().find(|(kind, _)| *kind == entry.kind) {
                Some((_, names)) => names.push(&entry.name),
                None => groups.push((entry.kind, vec![&entry.name])),
            }
        }
        groups
    }

    /// The stock catalog of points, lines, squares, cubes and tesseracts
    pub fn builtin() -> Self {
        let plain = |offset: Vec4| ShapeOptions::default().with_offset(offset);
        let blue = |offset: Vec4| ShapeOptions::default().with_offset(offset).with_color(Color::BLUE);

        let mut catalog = Self::new();

        catalog.add(
            CatalogEntry::new("normPoint", CatalogKind::Normal, "Point on (0,0,0,0)")
                .with_instance(0, plain(Vec4::ZERO)),
        );
        catalog.add(
            CatalogEntry::new("normLine", CatalogKind::Normal, "Line from (0,0,0,0) to (1,0,0,0)")
                .with_instance(1, plain(Vec4::ZERO)),
        );
        catalog.add(
            CatalogEntry::new("normSquare", CatalogKind::Normal, "Square from (0,0,0,0) to (1,1,0,0)")
                .with_instance(2, plain(Vec4::ZERO)),
        );
        catalog.add(
            CatalogEntry::new("normCube", CatalogKind::Normal, "Cube from (0,0,0,0) to (1,1,1,0)")
                .with_instance(3, plain(Vec4::ZERO)),
        );
        catalog.add(
            CatalogEntry::new(
                "normTesseract",
                CatalogKind::Normal,
                "Tesseract from (0,0,0,0) to (1,1,1,1)",
            )
            .with_instance(4, plain(Vec4::ZERO)),
        );

        catalog.add(
            CatalogEntry::new(
                "centerLine",
                CatalogKind::Center,
                "Line from (-0.5,0,0,0) to (0.5,0,0,0); centre on the origin",
            )
            .with_instance(1, plain(Vec4::new(-0.5, 0.0, 0.0, 0.0))),
        );
        catalog.add(
            CatalogEntry::new(
                "centerSquare",
                CatalogKind::Center,
                "Square from (-0.5,-0.5,0,0) to (0.5,0.5,0,0); centre on the origin",
            )
            .with_instance(2, plain(Vec4::new(-0.5, -0.5, 0.0, 0.0))),
        );
        catalog.add(
            CatalogEntry::new(
                "centerCube",
                CatalogKind::Center,
                "Cube from (-0.5,-0.5,-0.5,0) to (0.5,0.5,0.5,0); centre on the origin",
            )
            .with_instance(3, plain(Vec4::new(-0.5, -0.5, -0.5, 0.0)))
            .visible(true),
        );
        catalog.add(
            CatalogEntry::new(
                "centerTesseract",
                CatalogKind::Center,
                "Tesseract from (-0.5,-0.5,-0.5,-0.5) to (0.5,0.5,0.5,0.5); centre on the origin",
            )
            .with_instance(4, plain(Vec4::new(-0.5, -0.5, -0.5, -0.5))),
        );

        catalog.add(
            CatalogEntry::new(
                "invariantPoints",
                CatalogKind::MultiStructure,
                "Points on x+y+z=0, w=0 that stay fixed while XW, YW and ZW rotate together",
            )
            .with_instances(invariant_point_offsets().into_iter().map(|o| ShapeInstance::new(0, blue(o)))),
        );
        catalog.add(
            CatalogEntry::new(
                "multiCube",
                CatalogKind::MultiStructure,
                "Eight unit cubes in a 2x2x2 grid, together a cube of edge length 2",
            )
            .with_instances(grid_offsets(3).into_iter().map(|o| ShapeInstance::new(3, blue(o)))),
        );
        catalog.add(
            CatalogEntry::new(
                "multiTesseract",
                CatalogKind::MultiStructure,
                "Sixteen unit tesseracts in a 2x2x2x2 grid, together a tesseract of edge length 2",
            )
            .with_instances(grid_offsets(4).into_iter().map(|o| ShapeInstance::new(4, blue(o)))),
        );

        catalog
    }
}

/// `±(e_i - e_j)` for each axis pair `i < j` of X, Y, Z
fn invariant_point_offsets() -> Vec<Vec4> {
    let pairs = [(1, 2), (0, 2), (0, 1)];
    pairs
        .iter()
        .flat_map(|&(i, j)| {
            let mut v = [0.0f32; 4];
            v[i] = 1.0;
            v[j] = -1.0;
            let v = Vec4::from_array(v);
            [v, -v]
        })
        .collect()
}

/// Offsets placing `2^axes` unit cells around the origin, each axis in {-1, 0}
fn grid_offsets(axes: usize) -> Vec<Vec4> {
    (0..1u32 << axes)
        .map(|cell| {
            let mut v = [0.0f32; 4];
            for (axis, slot) in v.iter_mut().enumerate().take(axes) {
                // Most significant bit is X
                let bit = axes - 1 - axis;
                *slot = if cell & (1 << bit) == 0 { -1.0 } else { 0.0 };
            }
            Vec4::from_array(v)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        let catalog = Catalog::builtin();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(
            names,
            vec![
                "normPoint", "normLine", "normSquare", "normCube", "normTesseract",
                "centerLine", "centerSquare", "centerCube", "centerTesseract",
                "invariantPoints", "multiCube", "multiTesseract",
            ]
        );
    }

    #[test]
    fn test_builtin_visible_default() {
        let catalog = Catalog::builtin();
        let visible: Vec<&str> = catalog.visible_names().collect();
        assert_eq!(visible, vec!["centerCube"]);
    }

    #[test]
    fn test_builtin_entries_build() {
        let catalog = Catalog::builtin();
        for entry in &catalog.entries {
            let shapes = entry.build().unwrap_or_else(|e| panic!("{} failed: {}", entry.name, e));
            assert_eq!(shapes.len(), entry.instances.len());
        }
    }

    #[test]
    fn test_multi_structure_sizes() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get("invariantPoints").unwrap().instances.len(), 6);
        assert_eq!(catalog.get("multiCube").unwrap().instances.len(), 8);
        assert_eq!(catalog.get("multiTesseract").unwrap().instances.len(), 16);
    }

    #[test]
    fn test_invariant_points_lie_on_plane() {
        for offset in invariant_point_offsets() {
            assert_eq!(offset.x + offset.y + offset.z, 0.0);
            assert_eq!(offset.w, 0.0);
            assert_eq!(offset.length(), 2.0f32.sqrt());
        }
    }

    #[test]
    fn test_grid_offsets_are_distinct_corners() {
        let offsets = grid_offsets(3);
        assert_eq!(offsets[0], Vec4::new(-1.0, -1.0, -1.0, 0.0));
        assert_eq!(offsets[1], Vec4::new(-1.0, -1.0, 0.0, 0.0));
        assert_eq!(offsets[7], Vec4::ZERO);
        for (i, a) in offsets.iter().enumerate() {
            for b in &offsets[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(grid_offsets(4).iter().all(|o| o.w == -1.0 || o.w == 0.0));
    }

    #[test]
    fn test_multi_structure_is_blue() {
        let catalog = Catalog::builtin();
        let entry = catalog.get("multiCube").unwrap();
        assert!(entry.instances.iter().all(|i| i.options.color == Color::BLUE));
        let entry = catalog.get("normCube").unwrap();
        assert_eq!(entry.instances[0].options.color, Color::GREEN);
    }

    #[test]
    fn test_set_visible() {
        let mut catalog = Catalog::builtin();
        assert!(catalog.set_visible("normTesseract", true));
        assert!(catalog.get("normTesseract").unwrap().visible);
        assert!(!catalog.set_visible("noSuchShape", true));
    }

    #[test]
    fn test_apply_projection() {
        let mut catalog = Catalog::builtin();
        let projection = Projection::new(2.0, 0.5);
        catalog.apply_projection(projection);
        assert!(catalog
            .entries
            .iter()
            .flat_map(|e| &e.instances)
            .all(|i| i.options.projection == projection));
    }

    #[test]
    fn test_names_by_kind() {
        let catalog = Catalog::builtin();
        let groups = catalog.names_by_kind();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].0, CatalogKind::Normal);
        assert_eq!(groups[0].1.len(), 5);
        assert_eq!(groups[1].0, CatalogKind::Center);
        assert_eq!(groups[1].1.len(), 4);
        assert_eq!(groups[2].1, vec!["invariantPoints", "multiCube", "multiTesseract"]);
    }

    #[test]
    fn test_ron_round_trip() {
        let catalog = Catalog::builtin();
        let text = catalog.to_ron().unwrap();
        let back = Catalog::from_ron(&text).unwrap();
        assert_eq!(back, catalog);
    }

    #[test]
    fn test_save_then_load() {
        let catalog = Catalog::builtin();
        let path = std::env::temp_dir().join(format!("hc4-catalog-{}.ron", std::process::id()));
        catalog.save(&path).unwrap();
        let loaded = Catalog::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(loaded.unwrap(), catalog);
    }

    #[test]
    fn test_loaded_entry_with_bad_scale_fails_to_build() {
        let text = r#"(
            entries: [
                (
                    name: "flatCube",
                    kind: Normal,
                    instances: [(dimension: 3, options: (scaling_factor: -2.0))],
                ),
            ],
        )"#;
        let catalog = Catalog::from_ron(text).unwrap();
        let result = catalog.get("flatCube").unwrap().build();
        assert!(matches!(result, Err(ShapeError::InvalidOptions { .. })));
    }

    #[test]
    fn test_parse_minimal_entry_uses_defaults() {
        let text = r#"(
            entries: [
                (
                    name: "bigCube",
                    kind: Normal,
                    instances: [(dimension: 3, options: (scaling_factor: 2.0))],
                ),
            ],
        )"#;
        let catalog = Catalog::from_ron(text).unwrap();
        let entry = catalog.get("bigCube").unwrap();
        assert!(!entry.visible);
        assert!(entry.description.is_empty());
        let options = entry.instances[0].options;
        assert_eq!(options.scaling_factor, 2.0);
        assert_eq!(options.offset, Vec4::ZERO);
        assert_eq!(options.color, Color::GREEN);
    }

    #[test]
    fn test_parse_error() {
        let result = Catalog::from_ron("(entries: [ (name: 3) ])");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load("/nonexistent/catalog.ron");
        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
