#[cfg(test)]
mod tests {
    use chrono::{ TimeZone, Utc };

    use crate::models::{
        ClaimRecord,
        EvidenceItem,
        Score,
        Snapshot,
        Verdict,
        VerificationRecord,
        VerificationResult,
    };
    use crate::tests::{ claim, item, verification };

    #[test]
    fn score_displays_as_rounded_percentage() {
        assert_eq!(Score::new(0.73).to_string(), "73%");
        assert_eq!(Score::new(0.95).percent(), 95);
        assert_eq!(Score::new(0.005).percent(), 1);
        assert_eq!(Score::new(0.0).percent(), 0);
        assert_eq!(Score::new(1.0).percent(), 100);
    }

    #[test]
    fn score_is_clamped_into_unit_interval() {
        assert_eq!(Score::new(1.7).value(), 1.0);
        assert_eq!(Score::new(-0.2).value(), 0.0);
        assert_eq!(Score::new(f64::NAN).value(), 0.0);
        let s: Score = serde_json::from_str("3.5").unwrap();
        assert_eq!(s.value(), 1.0);
    }

    #[test]
    fn claim_decodes_service_payload() {
        let raw = r#"{
            "_id": "65a1f0c2e4b0a1b2c3d4e5f6",
            "raw_id": "abc",
            "text": "The earth is flat",
            "status": "unverified",
            "extracted_at": "2024-03-01T10:15:30.123456"
        }"#;
        let claim: ClaimRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(claim.id, "65a1f0c2e4b0a1b2c3d4e5f6");
        assert_eq!(claim.status, Verdict::Unknown);
        assert_eq!(claim.short_id(), "d4e5f6");
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 10, 15, 30).unwrap();
        assert_eq!(claim.extracted_at.map(|t| t.timestamp()), Some(expected.timestamp()));
    }

    #[test]
    fn claim_accepts_rfc3339_and_missing_timestamps() {
        let with_offset: ClaimRecord = serde_json::from_str(
            r#"{"id": "1", "text": "x", "status": "true", "extracted_at": "2024-03-01T12:00:00+02:00"}"#
        ).unwrap();
        assert_eq!(
            with_offset.extracted_at,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap())
        );

        let missing: ClaimRecord = serde_json::from_str(r#"{"id": "2", "text": "y"}"#).unwrap();
        assert_eq!(missing.extracted_at, None);
        assert_eq!(missing.status, Verdict::Unknown);
    }

    #[test]
    fn malformed_timestamp_decodes_as_missing() {
        let claim: ClaimRecord = serde_json::from_str(
            r#"{"id": "1", "text": "x", "extracted_at": "yesterday"}"#
        ).unwrap();
        assert_eq!(claim.extracted_at, None);

        let record: VerificationRecord = serde_json::from_str(
            r#"{"_id": "v1", "verdict": "true", "score": 0.4, "checked_at": 1709288130}"#
        ).unwrap();
        assert_eq!(record.checked_at, None);
    }

    #[test]
    fn short_id_of_short_ids_is_whole_id() {
        assert_eq!(claim("abc", "t", Verdict::True).short_id(), "abc");
    }

    #[test]
    fn verification_keeps_evidence_order_and_previews_prefix() {
        let raw = r#"{
            "_id": "v1",
            "claim_id": "c1",
            "verdict": "false",
            "score": 0.9,
            "checked_at": null,
            "evidence": [
                {"title": "First", "link": "https://a.example"},
                {"snippet": "Second snippet", "link": "https://b.example", "source": "NewsAPI"},
                {"title": "", "link": "https://c.example"},
                {"title": "Fourth", "link": "https://d.example"}
            ]
        }"#;
        let record: VerificationRecord = serde_json::from_str(raw).unwrap();
        let labels: Vec<&str> = record.evidence.iter().map(EvidenceItem::label).collect();
        assert_eq!(labels, vec!["First", "Second snippet", "https://c.example", "Fourth"]);
        assert_eq!(record.evidence_preview(3).len(), 3);
        assert_eq!(record.evidence_preview(10).len(), 4);
        assert_eq!(record.claim_id.as_deref(), Some("c1"));
    }

    #[test]
    fn evidence_without_link_still_decodes() {
        let raw = r#"[
            {"_id": "v1", "verdict": "false", "score": 0.8, "evidence": [
                {"title": "Reuters", "snippet": null, "link": null, "source": "Web"},
                {"snippet": "Only a snippet", "link": null},
                {"link": "https://a.example"}
            ]},
            {"_id": "v2", "verdict": "true", "score": 0.7, "evidence": [{"title": "Bare"}]}
        ]"#;
        let records: Vec<VerificationRecord> = serde_json::from_str(raw).unwrap();
        assert_eq!(records.len(), 2);
        let labels: Vec<&str> = records[0].evidence.iter().map(EvidenceItem::label).collect();
        assert_eq!(labels, vec!["Reuters", "Only a snippet", "https://a.example"]);
        assert_eq!(records[0].evidence[0].link, "");
        assert_eq!(records[1].evidence[0].label(), "Bare");
    }

    #[test]
    fn verification_with_null_evidence_decodes_to_empty_list() {
        let record: VerificationRecord = serde_json::from_str(
            r#"{"_id": "v2", "verdict": "mixture", "score": 0.5, "evidence": null}"#
        ).unwrap();
        assert!(record.evidence.is_empty());
    }

    #[test]
    fn verification_result_decodes_with_optional_fields() {
        let raw = r#"{
            "verdict": "false",
            "score": 0.95,
            "summary": "No credible source supports this.",
            "reasons": ["satellite imagery", "physics"],
            "evidence": [{"title": "NASA", "link": "https://nasa.gov"}]
        }"#;
        let result: VerificationResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.verdict, Verdict::False);
        assert_eq!(result.score.to_string(), "95%");
        assert_eq!(result.reasons, vec!["satellite imagery", "physics"]);

        let bare: VerificationResult = serde_json::from_str(r#"{"verdict": "true", "score": 0.6}"#).unwrap();
        assert!(bare.summary.is_none());
        assert!(bare.reasons.is_empty());
        assert!(bare.evidence.is_empty());
    }

    #[test]
    fn snapshot_with_error_keeps_lists_and_sync_time() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let snapshot = Snapshot::synced(
            vec![claim("a", "x", Verdict::True)],
            vec![verification("v", Verdict::False, 0.4)],
            vec![item(1)],
            at
        );
        let failed = snapshot.with_error(crate::errors::ErrorInfo::from_error(
            &crate::errors::FactWatchError::Network("down".to_string())
        ));
        assert_eq!(failed.claims, snapshot.claims);
        assert_eq!(failed.verifications, snapshot.verifications);
        assert_eq!(failed.items, snapshot.items);
        assert_eq!(failed.last_sync_at, Some(at));
        assert!(failed.last_error.is_some());
    }
}
