#[cfg(test)]
mod tests {
    use crate::message::*;
    use crate::event::*;
    use crate::api::*;
    use crate::dataset::*;
    use crate::analytics::*;
    use crate::config::*;
    use crate::session::*;
    use crate::error::*;
    use serde_json::json;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_draft_user() {
        let draft = MessageDraft::user("Hello");
        assert_eq!(draft.role, Role::User);
        assert_eq!(draft.content, "Hello");
        assert!(draft.success.is_none());
        assert!(draft.error.is_none());
    }

    #[test]
    fn test_draft_agent() {
        let draft = MessageDraft::agent("Sales data generated");
        assert_eq!(draft.role, Role::Agent);
        assert_eq!(draft.success, Some(true));
        assert!(draft.error.is_none());
    }

    #[test]
    fn test_draft_from_reply_keeps_remote_failure() {
        let reply = AgentReply {
            response: "partial".to_string(),
            success: false,
            error: Some("model overloaded".to_string()),
        };
        let draft = MessageDraft::from_reply(reply);
        assert_eq!(draft.role, Role::Agent);
        assert_eq!(draft.content, "partial");
        assert_eq!(draft.success, Some(false));
        assert_eq!(draft.error.as_deref(), Some("model overloaded"));
    }

    #[test]
    fn test_draft_failure_has_empty_content() {
        let draft = MessageDraft::failure("Connection error: refused");
        assert_eq!(draft.role, Role::Agent);
        assert!(draft.content.is_empty());
        assert_eq!(draft.success, Some(false));
        assert_eq!(draft.error.as_deref(), Some("Connection error: refused"));
    }

    fn message(success: Option<bool>, error: Option<&str>) -> Message {
        Message {
            id: MessageId(1),
            role: Role::Agent,
            content: "content".to_string(),
            timestamp: chrono::Utc::now(),
            success,
            error: error.map(String::from),
        }
    }

    #[test]
    fn test_message_is_failure() {
        assert!(!message(Some(true), None).is_failure());
        assert!(!message(None, None).is_failure());
        assert!(message(Some(false), None).is_failure());
        // error wins even when success was reported
        assert!(message(Some(true), Some("boom")).is_failure());
    }

    #[test]
    fn test_message_display_text() {
        assert_eq!(message(Some(true), None).display_text(), "content");
        assert_eq!(message(Some(false), Some("boom")).display_text(), "boom");
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(serde_json::to_string(&Role::Agent).unwrap(), r#""agent""#);
    }

    #[test]
    fn test_message_serialization_skips_absent_fields() {
        let mut msg = message(None, None);
        msg.role = Role::User;
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["role"], "user");
        assert!(json.get("success").is_none());
        assert!(json.get("error").is_none());
    }

    // ─── API Body Tests ──────────────────────────────────────

    #[test]
    fn test_agent_reply_defaults() {
        let reply: AgentReply = serde_json::from_str("{}").unwrap();
        assert!(reply.response.is_empty());
        assert!(reply.success);
        assert!(reply.error.is_none());
    }

    #[test]
    fn test_agent_reply_failure() {
        let reply: AgentReply = serde_json::from_value(json!({
            "response": "",
            "success": false,
            "error": "No data available"
        }))
        .unwrap();
        assert!(!reply.success);
        assert_eq!(reply.error.as_deref(), Some("No data available"));
    }

    #[test]
    fn test_chat_payload_shape() {
        let payload = ChatPayload {
            message: "hi".to_string(),
            context: json!({"sales": []}),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["message"], "hi");
        assert!(value["context"]["sales"].is_array());
    }

    #[test]
    fn test_sample_data_missing_description() {
        let data: SampleData = serde_json::from_value(json!({"data": {"TV": 4}})).unwrap();
        assert_eq!(data.data["TV"], 4);
        assert!(data.description.is_empty());
    }

    // ─── DatasetKind Tests ───────────────────────────────────

    #[test]
    fn test_dataset_kind_keys() {
        assert_eq!(DatasetKind::Sales.key(), "sales");
        assert_eq!(DatasetKind::Inventory.key(), "inventory");
        assert_eq!(DatasetKind::Pricing.key(), "pricing");
        assert_eq!(DatasetKind::all().len(), 3);
    }

    #[test]
    fn test_dataset_kind_from_str() {
        assert_eq!("sales".parse::<DatasetKind>().unwrap(), DatasetKind::Sales);
        assert_eq!(" Inventory ".parse::<DatasetKind>().unwrap(), DatasetKind::Inventory);
        assert!("weather".parse::<DatasetKind>().is_err());
    }

    #[test]
    fn test_dataset_kind_labels_not_empty() {
        for kind in DatasetKind::all() {
            assert!(!kind.generate_label().is_empty());
            assert!(!kind.analysis_label().is_empty());
        }
    }

    // ─── Analytics Type Tests ────────────────────────────────

    #[test]
    fn test_series_point_share() {
        let point = SeriesPoint {
            label: "TV".to_string(),
            value: 25.0,
            full_label: "TV".to_string(),
        };
        assert_eq!(point.share_of(100.0), 0.25);
        assert_eq!(point.share_of(0.0), 0.0);
    }

    #[test]
    fn test_series_point_camel_case() {
        let point = SeriesPoint {
            label: "Refrigerat…".to_string(),
            value: 1.0,
            full_label: "Refrigerator".to_string(),
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["fullLabel"], "Refrigerator");
    }

    #[test]
    fn test_metrics_camel_case() {
        let json = serde_json::to_value(Metrics::default()).unwrap();
        assert!(json.get("totalSales").is_some());
        assert!(json.get("totalProducts").is_some());
        assert!(json.get("totalStock").is_some());
        assert!(json.get("avgSale").is_some());
    }

    #[test]
    fn test_metrics_summary_lines() {
        let metrics = Metrics {
            total_sales: 12500.0,
            total_products: 4,
            total_stock: 320.0,
            avg_sale: 416.6,
        };
        let lines = metrics.summary_lines();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "4 products in catalog");
        assert_eq!(lines[1], "$12,500 in recorded sales");
        assert_eq!(lines[2], "320 units in stock");
        assert_eq!(lines[3], "Average ticket of $417");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(18.0), "18");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(1000.0), "1,000");
        assert_eq!(format_amount(1234567.5), "1,234,567.5");
        assert_eq!(format_amount(-2500.25), "-2,500.25");
        assert_eq!(format_amount(f64::NAN), "0");
    }

    #[test]
    fn test_dashboard_default_is_empty() {
        let dashboard = Dashboard::default();
        assert!(dashboard.is_empty());
        assert_eq!(dashboard.metrics, Metrics::default());
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_event_serialization() {
        let event = ConsoleEvent::StatusChanged(DispatchState::Busy(CallKind::Chat));
        let json = serde_json::to_string(&event).unwrap();
        let back: ConsoleEvent = serde_json::from_str(&json).unwrap();
        assert!(matches!(
            back,
            ConsoleEvent::StatusChanged(DispatchState::Busy(CallKind::Chat))
        ));
    }

    // ─── Session State Tests ─────────────────────────────────

    #[test]
    fn test_dispatch_state_default_idle() {
        let state = DispatchState::default();
        assert_eq!(state, DispatchState::Idle);
        assert!(!state.is_busy());
        assert_eq!(state.label(), "Online");
    }

    #[test]
    fn test_dispatch_state_labels() {
        assert_eq!(DispatchState::Busy(CallKind::Chat).label(), "Processing...");
        assert_eq!(
            DispatchState::Busy(CallKind::GenerateDataset(DatasetKind::Sales)).label(),
            "Generating sales data..."
        );
        assert_eq!(
            DispatchState::Busy(CallKind::QuickAnalysis("pricing".to_string())).label(),
            "Analyzing pricing..."
        );
    }

    #[test]
    fn test_call_kind_display() {
        assert_eq!(CallKind::Chat.to_string(), "chat");
        assert_eq!(
            CallKind::GenerateDataset(DatasetKind::Inventory).to_string(),
            "generate-dataset/inventory"
        );
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_config_defaults() {
        let config = ConsoleConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.starter_prompts.len(), 5);
        assert_eq!(config.dataset_kinds.len(), 3);
    }

    #[test]
    fn test_api_endpoint_joins_paths() {
        let api = ApiConfig::new("http://agent.local:9000/");
        assert_eq!(api.endpoint("chat"), "http://agent.local:9000/chat");
        assert_eq!(api.endpoint("/sample-data/sales"), "http://agent.local:9000/sample-data/sales");
    }

    #[test]
    fn test_api_endpoint_blank_base_falls_back() {
        let api = ApiConfig::new("   ");
        assert_eq!(api.endpoint("chat"), "http://localhost:8000/chat");
    }

    #[test]
    fn test_config_roundtrip() {
        let config = ConsoleConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ConsoleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConsoleError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(
            ConsoleError::Http { status: 500, body: "oops".to_string() }.to_string(),
            "HTTP 500: oops"
        );
        assert_eq!(ConsoleError::Busy.to_string(), "Another request is still in flight");
    }

    #[test]
    fn test_error_is_transport() {
        assert!(ConsoleError::Network("x".to_string()).is_transport());
        assert!(ConsoleError::Http { status: 404, body: String::new() }.is_transport());
        assert!(ConsoleError::Decode("x".to_string()).is_transport());
        assert!(!ConsoleError::Busy.is_transport());
        assert!(!ConsoleError::EmptyInput.is_transport());
    }

    #[test]
    fn test_error_from_serde() {
        let err: ConsoleError = serde_json::from_str::<AgentReply>("{{").unwrap_err().into();
        assert!(matches!(err, ConsoleError::Serialization(_)));
    }
}
