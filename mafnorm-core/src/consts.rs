// Record layout stuff
pub const DELIMITER: char = '\t';
pub const BED_FILE_EXTENSION: &str = "bed";

/// Fields a record must carry to be usable: chrom through the second alt
/// allele. The id column and anything after it are optional.
pub const MIN_FIELDS: usize = 11;

// Special tokens
pub const EMPTY_ALLELE_PLACEHOLDER: &str = "-";
pub const NOVEL_VARIANT_ID: &str = "novel";
pub const INSERTION_VARIANT_TYPE: &str = "INS";

// CLI stuff
pub const CONVERT_CMD: &str = "convert";

/// Chromosome tokens accepted by the filter. Fixed external mapping: the
/// `chr23`..`chr25` forms and the bare numerics 23/24/25 are non-standard
/// aliases for X/Y/MT seen in upstream contig names.
pub const VALID_CHROMOSOMES: [&str; 53] = [
    "chr1", "chr2", "chr3", "chr4", "chr5", "chr6", "chr7", "chr8", "chr9", "chr10", "chr11",
    "chr12", "chr13", "chr14", "chr15", "chr16", "chr17", "chr18", "chr19", "chr20", "chr21",
    "chr22", "chr23", "chr24", "chr25", "chrX", "chrY", "chrMT", "1", "2", "3", "4", "5", "6",
    "7", "8", "9", "10", "11", "12", "13", "14", "15", "16", "17", "18", "19", "20", "21", "22",
    "23", "24", "25",
];
