use std::fmt::{self, Display};

use crate::models::record::MafRecord;

///
/// One single-alt candidate split off a [MafRecord]. Carries the record's
/// columns with a single alt allele plus the two allele-support flags: `al1`
/// and `al2` mark whether the first/second original alt call supports this
/// candidate. The normalization stages mutate coordinates and allele strings
/// in place; once fingerprinted the variant is serialized as-is.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    pub chrom: String,
    pub start: u32,
    pub stop: u32,
    pub strand: String,
    pub hugo_symbol: String,
    pub entrez_gene_id: String,
    pub classification: String,
    pub variant_type: String,
    pub ref_allele: String,
    pub alt_allele: String,
    pub al1: bool,
    pub al2: bool,
    pub dbsnp_id: Option<String>,
    pub trailing: Vec<String>,
}

impl Variant {
    pub fn from_record(record: &MafRecord, alt_allele: &str, al1: bool, al2: bool) -> Self {
        Variant {
            chrom: record.chrom.clone(),
            start: record.start,
            stop: record.stop,
            strand: record.strand.clone(),
            hugo_symbol: record.hugo_symbol.clone(),
            entrez_gene_id: record.entrez_gene_id.clone(),
            classification: record.classification.clone(),
            variant_type: record.variant_type.clone(),
            ref_allele: record.ref_allele.clone(),
            alt_allele: alt_allele.to_string(),
            al1,
            al2,
            dbsnp_id: record.dbsnp_id.clone(),
            trailing: record.trailing.clone(),
        }
    }

    ///
    /// Canonical (chrom, start, ref, alt) key for within-file deduplication.
    /// Computed on post-normalization values so differently-spelled but
    /// identical variants collapse; never emitted.
    ///
    pub fn fingerprint(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}",
            self.chrom, self.start, self.ref_allele, self.alt_allele
        )
    }

    ///
    /// Get the output line for this variant: the input column layout with
    /// the two support flags inserted right after the alt allele.
    ///
    pub fn as_string(&self) -> String {
        let mut fields: Vec<String> = vec![
            self.chrom.clone(),
            self.start.to_string(),
            self.stop.to_string(),
            self.strand.clone(),
            self.hugo_symbol.clone(),
            self.entrez_gene_id.clone(),
            self.classification.clone(),
            self.variant_type.clone(),
            self.ref_allele.clone(),
            self.alt_allele.clone(),
            flag_field(self.al1),
            flag_field(self.al2),
        ];

        if let Some(id) = &self.dbsnp_id {
            fields.push(id.clone());
        }
        fields.extend(self.trailing.iter().cloned());

        fields.join("\t")
    }
}

fn flag_field(flag: bool) -> String {
    if flag { "1" } else { "0" }.to_string()
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
