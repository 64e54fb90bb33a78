use std::str::FromStr;

use crate::consts::{DELIMITER, MIN_FIELDS};
use crate::errors::TransformError;

///
/// One raw MAF-derived record as read from a `.bed` input line: a locus with
/// a reference allele and up to two alternate allele calls. Coordinates are
/// 1-based inclusive, the way the upstream files ship them.
///
/// The fixed columns are chrom, start, stop, strand, gene symbol, gene id,
/// classification, variant type, ref, alt1 and alt2. The known-variant id
/// (the dbSNP_RS position of the layout) is the first column after alt2 and
/// may be absent; anything after it is opaque passthrough data.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MafRecord {
    pub chrom: String,
    pub start: u32,
    pub stop: u32,
    pub strand: String,
    pub hugo_symbol: String,
    pub entrez_gene_id: String,
    pub classification: String,
    pub variant_type: String,
    pub ref_allele: String,
    pub alt1: String,
    pub alt2: String,
    pub dbsnp_id: Option<String>,
    pub trailing: Vec<String>,
}

impl FromStr for MafRecord {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(DELIMITER).collect();

        if fields.len() < MIN_FIELDS {
            return Err(TransformError::MalformedRecord(format!(
                "expected at least {} tab-separated fields, found {}: {:?}",
                MIN_FIELDS,
                fields.len(),
                s
            )));
        }

        let start = parse_coordinate(fields[1], "start")?;
        let stop = parse_coordinate(fields[2], "stop")?;

        Ok(MafRecord {
            chrom: fields[0].to_string(),
            start,
            stop,
            strand: fields[3].to_string(),
            hugo_symbol: fields[4].to_string(),
            entrez_gene_id: fields[5].to_string(),
            classification: fields[6].to_string(),
            variant_type: fields[7].to_string(),
            ref_allele: fields[8].to_string(),
            alt1: fields[9].to_string(),
            alt2: fields[10].to_string(),
            dbsnp_id: fields.get(11).map(|f| f.to_string()),
            trailing: fields
                .get(12..)
                .unwrap_or_default()
                .iter()
                .map(|f| f.to_string())
                .collect(),
        })
    }
}

fn parse_coordinate(field: &str, name: &str) -> Result<u32, TransformError> {
    field.parse::<u32>().map_err(|_| {
        TransformError::InvalidCoordinate(format!("{:?} is not a valid {} coordinate", field, name))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn snp_line() -> &'static str {
        "chr9\t123936008\t123936008\t+\tCNTRL\t11064\tMissense_Mutation\tSNP\tG\tT\tA\tnull\tS1\tS2\tnull\tnull\tid1"
    }

    #[rstest]
    fn test_parse_full_record(snp_line: &str) {
        let record: MafRecord = snp_line.parse().unwrap();

        assert_eq!(record.chrom, "chr9");
        assert_eq!(record.start, 123936008);
        assert_eq!(record.stop, 123936008);
        assert_eq!(record.strand, "+");
        assert_eq!(record.hugo_symbol, "CNTRL");
        assert_eq!(record.entrez_gene_id, "11064");
        assert_eq!(record.classification, "Missense_Mutation");
        assert_eq!(record.variant_type, "SNP");
        assert_eq!(record.ref_allele, "G");
        assert_eq!(record.alt1, "T");
        assert_eq!(record.alt2, "A");
        assert_eq!(record.dbsnp_id.as_deref(), Some("null"));
        assert_eq!(record.trailing, vec!["S1", "S2", "null", "null", "id1"]);
    }

    #[rstest]
    fn test_parse_minimal_record() {
        let line = "7\t140453139\t140453163\t1\tCNTRL\t11064\tMissense_Mutation\tINS\tT\tT\tTT";
        let record: MafRecord = line.parse().unwrap();

        assert_eq!(record.chrom, "7");
        assert_eq!(record.alt2, "TT");
        assert_eq!(record.dbsnp_id, None);
        assert!(record.trailing.is_empty());
    }

    #[rstest]
    fn test_parse_record_with_id_only() {
        let line = "7\t140453139\t140453163\t1\tCNTRL\t11064\tMissense_Mutation\tINS\tT\tT\tTT\trs121913368";
        let record: MafRecord = line.parse().unwrap();

        assert_eq!(record.dbsnp_id.as_deref(), Some("rs121913368"));
        assert!(record.trailing.is_empty());
    }

    #[rstest]
    fn test_truncated_record_is_an_error() {
        let res = "chr9\t123936008\t123936008\t+\tCNTRL".parse::<MafRecord>();

        assert!(matches!(res, Err(TransformError::MalformedRecord(_))));
    }

    #[rstest]
    fn test_blank_line_is_an_error() {
        let res = "".parse::<MafRecord>();

        assert!(matches!(res, Err(TransformError::MalformedRecord(_))));
    }

    #[rstest]
    #[case("chr9\tnot_a_number\t123936008\t+\tCNTRL\t11064\tMissense_Mutation\tSNP\tG\tT\tA")]
    #[case("chr9\t123936008\t-5\t+\tCNTRL\t11064\tMissense_Mutation\tSNP\tG\tT\tA")]
    fn test_bad_coordinate_is_an_error(#[case] line: &str) {
        let res = line.parse::<MafRecord>();

        assert!(matches!(res, Err(TransformError::InvalidCoordinate(_))));
    }
}
