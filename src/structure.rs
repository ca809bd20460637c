use indexmap::IndexMap;

// Declaration order below is presentation order. The renderer walks this table
// top to bottom, so reordering it changes the program's output.
const BIODASH_FOLDERS: &[(&str, &[&str])] = &[
    (
        "biodash/",
        &[
            "package.json",
            "vite.config.mjs",
            "tailwind.config.mjs",
            "postcss.config.js",
            ".gitignore",
            "README.md",
            "public/",
            "src/",
        ],
    ),
    ("biodash/public/", &["vite.svg"]),
    (
        "biodash/src/",
        &[
            "main.jsx",
            "App.jsx",
            "index.css",
            "components/",
            "pages/",
            "lib/",
        ],
    ),
    (
        "biodash/src/components/",
        &["Layout.jsx", "ThemeProvider.jsx", "ui/"],
    ),
    (
        "biodash/src/components/ui/",
        &[
            "button.jsx",
            "card.jsx",
            "input.jsx",
            "table.jsx",
            "textarea.jsx",
        ],
    ),
    (
        "biodash/src/pages/",
        &[
            "Dashboard.jsx",
            "Supplements.jsx",
            "Interactions.jsx",
            "Transparency.jsx",
            "HealthLog.jsx",
            "Auth.jsx",
        ],
    ),
    ("biodash/src/lib/", &["data.js", "utils.js"]),
];

/// An ordered mapping from folder path to the entries declared under it.
///
/// Folder paths conventionally end in `/`, as do entry names that denote
/// subfolders. The mapping is built once, at startup, from a literal table and
/// never mutated afterwards. Iteration order is declaration order, which is why
/// the folders live in an [`IndexMap`] rather than an unordered map.
#[derive(Debug, Clone)]
pub struct ProjectStructure {
    name: String,
    folders: IndexMap<String, Vec<String>>,
}

impl ProjectStructure {
    /// Builds a structure from `(folder path, entries)` pairs, preserving the
    /// order in which they are given. Duplicate folder paths keep the first
    /// occurrence's position.
    pub fn from_folders<I, S>(name: impl Into<String>, folders: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<S>)>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            folders: folders
                .into_iter()
                .map(|(path, entries)| {
                    (path.into(), entries.into_iter().map(Into::into).collect())
                })
                .collect(),
        }
    }

    /// The hard-coded BioDash layout this binary exists to print.
    pub fn biodash() -> Self {
        Self::from_folders(
            "BioDash",
            BIODASH_FOLDERS
                .iter()
                .map(|(path, entries)| (*path, entries.to_vec())),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Folder entries in declaration order.
    pub fn folders(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.folders
            .iter()
            .map(|(path, entries)| (path.as_str(), entries.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}
