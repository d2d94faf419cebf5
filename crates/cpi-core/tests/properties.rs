//! Property tests for projection and operation tagging.

mod common;

use common::{ProjectingBridge, RecordingBridge};
use cpi_core::model::SearchParams;
use cpi_core::{ClientApi, FieldList, Record};
use proptest::prelude::*;
use serde_json::{Map, Value, json};

const FIELD_POOL: &[&str] = &["Name", "Phone", "Email", "City", "InternalID", "UUID", "Status"];

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

fn arb_field_list() -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(FIELD_POOL, 1..=FIELD_POOL.len())
        .prop_map(|fields| fields.into_iter().map(String::from).collect())
}

fn arb_record() -> impl Strategy<Value = Value> {
    prop::collection::btree_map(prop::sample::select(FIELD_POOL), any::<i32>(), 0..FIELD_POOL.len())
        .prop_map(|fields| {
            let map: Map<String, Value> = fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), json!(v)))
                .collect();
            Value::Object(map)
        })
}

fn valid_calls() -> Vec<(&'static str, Value)> {
    vec![
        ("pepperi.api.accounts.get", json!({"key": {"InternalID": 1}, "fields": ["Name"]})),
        ("pepperi.api.items.search", json!({"fields": ["Name"]})),
        ("pepperi.api.userDefinedTables.getList", json!({"table": "T"})),
        ("pepperi.app.accounts.add", json!({})),
        ("pepperi.app.accounts.update", json!({"objects": [{"UUID": "a"}]})),
    ]
}

proptest! {
    #[test]
    fn search_results_never_exceed_requested_fields(
        requested in arb_field_list(),
        records in prop::collection::vec(arb_record(), 0..8),
    ) {
        let fields = FieldList::new(requested).unwrap();
        let client = ClientApi::new(ProjectingBridge { records: records.clone() }).unwrap();

        let page = runtime()
            .block_on(client.api().accounts().search::<Record>(&SearchParams::new(fields.clone())))
            .unwrap();

        prop_assert_eq!(page.objects.len(), records.len());
        for record in &page.objects {
            prop_assert!(record.is_projection_of(&fields));
        }
    }

    #[test]
    fn function_key_always_names_the_called_operation(
        (name, params) in prop::sample::select(valid_calls()),
        stale in "[a-z.]{0,24}",
    ) {
        let bridge = RecordingBridge::accepting_everything();
        let client = ClientApi::new(bridge.clone()).unwrap();

        let mut params = params;
        params["function"] = json!(stale);
        runtime().block_on(client.call(name, params)).unwrap();

        let calls = bridge.calls();
        prop_assert_eq!(calls.len(), 1);
        prop_assert_eq!(calls[0]["function"].as_str(), Some(name));
    }
}
