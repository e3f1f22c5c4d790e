use std::collections::BTreeSet;
use std::fmt::{self, Display};

///
/// An ordered, duplicate-free set of gene names.
///
/// Empty names and names containing `,` are never stored, so the
/// comma-joined form always reads back to the same set. Displays as a comma-joined list, or `.`
/// when the set has no genes (the BED placeholder for a missing name).
///
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GeneSet(BTreeSet<String>);

impl GeneSet {
    pub fn new() -> Self {
        GeneSet(BTreeSet::new())
    }

    ///
    /// Add a gene name; returns `false` when it was already present or is not
    /// a valid name (see [GeneSet::is_valid_name]).
    ///
    pub fn insert<S: Into<String>>(&mut self, gene: S) -> bool {
        let gene = gene.into();
        if !GeneSet::is_valid_name(&gene) {
            return false;
        }
        self.0.insert(gene)
    }

    /// A name can be stored when it is non-empty and has no `,` separator.
    pub fn is_valid_name(gene: &str) -> bool {
        !gene.is_empty() && !gene.contains(',')
    }

    /// Union `other` into this set.
    pub fn extend_from(&mut self, other: &GeneSet) {
        self.0.extend(other.0.iter().cloned());
    }

    pub fn contains(&self, gene: &str) -> bool {
        self.0.contains(gene)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    ///
    /// Parse the comma-joined form written by [Display]. `.` is the empty set.
    ///
    pub fn parse(field: &str) -> Self {
        let field = field.trim();
        if field == "." {
            return GeneSet::new();
        }
        field.split(',').map(str::trim).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for GeneSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut genes = GeneSet::new();
        for gene in iter {
            genes.insert(gene);
        }
        genes
    }
}

impl<'a> IntoIterator for &'a GeneSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for GeneSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, ".");
        }
        let joined: Vec<&str> = self.0.iter().map(String::as_str).collect();
        write!(f, "{}", joined.join(","))
    }
}
