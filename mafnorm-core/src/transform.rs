use fxhash::FxHashSet;

use crate::consts::{
    EMPTY_ALLELE_PLACEHOLDER, INSERTION_VARIANT_TYPE, NOVEL_VARIANT_ID, VALID_CHROMOSOMES,
};
use crate::errors::TransformError;
use crate::models::{MafRecord, Variant};

///
/// Check whether a chromosome token belongs to the accepted set. Exact
/// string membership, no case or whitespace normalization.
///
pub fn is_valid_chromosome(chrom: &str) -> bool {
    VALID_CHROMOSOMES.contains(&chrom)
}

///
/// Split one record into its single-alt candidates: none when neither alt
/// call differs from the reference, one when only one does (or when both
/// name the same alt allele), two when the calls name distinct alleles.
/// The alt1-derived candidate always comes first.
///
/// # Arguments
/// - record: the parsed input record
/// - skip_invalid_chrom: drop the whole record when its chromosome is not
///   in the accepted set
///
pub fn split_alleles(record: &MafRecord, skip_invalid_chrom: bool) -> Vec<Variant> {
    if skip_invalid_chrom && !is_valid_chromosome(&record.chrom) {
        return Vec::new();
    }

    let mut variants = Vec::new();

    if record.ref_allele != record.alt1 {
        // both flags are decided before the candidate is built: al2 holds
        // when the second call restates the same alt allele
        let restated = record.alt1 == record.alt2;
        variants.push(Variant::from_record(record, &record.alt1, true, restated));
    }

    if record.ref_allele != record.alt2 && record.alt2 != record.alt1 {
        variants.push(Variant::from_record(record, &record.alt2, false, true));
    }

    variants
}

///
/// Strip the shared leading bases of ref and alt and advance the start
/// coordinate by the same number of bases, leaving the minimal
/// representation of the variant. If the stop coordinate fell behind the
/// advanced start it is clamped so that stop >= start keeps holding.
///
pub fn trim_shared_prefix(variant: &mut Variant) {
    let mut shared_bases: u32 = 0;
    let mut shared_bytes: usize = 0;
    for (r, a) in variant.ref_allele.chars().zip(variant.alt_allele.chars()) {
        if r != a {
            break;
        }
        shared_bases += 1;
        shared_bytes += r.len_utf8();
    }

    if shared_bases == 0 {
        return;
    }

    variant.ref_allele.drain(..shared_bytes);
    variant.alt_allele.drain(..shared_bytes);
    variant.start += shared_bases;
    if variant.stop < variant.start {
        variant.stop = variant.start;
    }
}

/// Map the "no allele" placeholder to an empty allele string.
pub fn clear_allele_placeholder(allele: &mut String) {
    if allele == EMPTY_ALLELE_PLACEHOLDER {
        allele.clear();
    }
}

///
/// Shift the 1-based inclusive input coordinates to the 0-based output
/// convention. Insertions are zero-length anchors between two bases rather
/// than spans, so their stop collapses to the converted start.
///
pub fn to_zero_based(variant: &mut Variant) {
    variant.start = variant.start.saturating_sub(1);
    if variant.variant_type == INSERTION_VARIANT_TYPE {
        variant.stop = variant.start;
    }
}

/// Map the "novel" id marker to an empty string; known accessions pass
/// through, as do records without an id column.
pub fn clear_novel_id(variant: &mut Variant) {
    if let Some(id) = variant.dbsnp_id.as_mut() {
        if id == NOVEL_VARIANT_ID {
            id.clear();
        }
    }
}

///
/// Run the normalization stages on one candidate, in order: prefix
/// trimming, allele placeholder clearing, coordinate conversion, id
/// clearing. Fingerprinting and serialization expect exactly this order.
///
pub fn normalize_variant(variant: &mut Variant) {
    trim_shared_prefix(variant);
    clear_allele_placeholder(&mut variant.ref_allele);
    clear_allele_placeholder(&mut variant.alt_allele);
    to_zero_based(variant);
    clear_novel_id(variant);
}

///
/// Fingerprints already emitted for one file. Built fresh at file-open,
/// dropped at file-close, never shared across files.
///
#[derive(Debug, Default)]
pub struct SeenVariants {
    fingerprints: FxHashSet<String>,
}

impl SeenVariants {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the variant; true when its fingerprint wasn't seen before.
    pub fn is_new(&mut self, variant: &Variant) -> bool {
        self.fingerprints.insert(variant.fingerprint())
    }
}

///
/// Transform one raw input line into zero, one or two normalized output
/// lines, suppressing variants whose fingerprint was already emitted for
/// this file. Output order follows candidate order; `seen` is mutated in
/// place.
///
pub fn transform_line(line: &str, seen: &mut SeenVariants) -> Result<Vec<String>, TransformError> {
    let record: MafRecord = line.parse()?;

    let mut output = Vec::new();
    for mut variant in split_alleles(&record, true) {
        normalize_variant(&mut variant);
        if seen.is_new(&variant) {
            output.push(variant.as_string());
        }
    }

    Ok(output)
}
