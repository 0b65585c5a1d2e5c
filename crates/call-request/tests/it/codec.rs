use callreq_types::{AccessList, AccessListItem, Address, B256, Bytes, CallRequest, U256};
use serde_json::{Value, json};
use similar_asserts::assert_eq;

fn keys(value: &Value) -> Vec<&str> {
    value.as_object().unwrap().keys().map(String::as_str).collect()
}

#[test]
fn omits_access_list_and_chain_id() {
    let value = CallRequest::default().to_json_value().unwrap();
    assert_eq!(value["from"], Value::Null);
    assert!(value.get("accessList").is_none());
    assert!(value.get("chainId").is_none());
    let mut keys = keys(&value);
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "data",
            "from",
            "gas",
            "gasPrice",
            "maxFeePerGas",
            "maxPriorityFeePerGas",
            "nonce",
            "to",
            "value"
        ]
    );
}

#[test]
fn writes_access_list_and_chain_id_when_set() {
    let storage_key = B256::with_last_byte(1);
    let list = AccessList(vec![AccessListItem {
        address: Address::with_last_byte(0xaa),
        storage_keys: vec![storage_key],
    }]);
    let req = CallRequest::default().with_access_list(list.clone()).with_chain_id(U256::from(10));
    let value = req.to_json_value().unwrap();
    assert_eq!(value["chainId"], json!("0xa"));
    assert_eq!(value["accessList"], serde_json::to_value(&list).unwrap());
}

#[test]
fn conflicting_payload_fails_to_encode() {
    let req = CallRequest::default()
        .with_legacy_input(Bytes::from_static(&[0x01]))
        .with_data(Bytes::from_static(&[0x02]));
    let err = req.encode().unwrap_err();
    assert!(err.is_conflict());
    assert_eq!(err.to_string(), "both 'input' and 'data' provided but not same");
}

#[test]
fn equal_payloads_encode_as_data() {
    let req = CallRequest::default()
        .with_legacy_input(Bytes::from_static(&[0x01]))
        .with_data(Bytes::from_static(&[0x01]));
    let encoded = String::from_utf8(req.encode().unwrap()).unwrap();
    assert!(encoded.contains(r#""data":"0x01""#));
    assert!(!encoded.contains("input"));
}

#[test]
fn input_overrides_data() {
    let req = CallRequest::decode(br#"{"data":"0x01","input":"0x02"}"#).unwrap();
    assert_eq!(req.payload(), Some(&Bytes::from_static(&[0x02])));
}

#[test]
fn merges_instead_of_replacing() {
    let mut req = CallRequest::default().with_value(U256::from(100));
    req.merge_json(br#"{"gas":"0x5"}"#).unwrap();
    assert_eq!(req, CallRequest::default().with_value(U256::from(100)).with_gas(5));
}

#[test]
fn malformed_input_leaves_record_untouched() {
    let mut req = CallRequest::default().with_value(U256::from(100));
    let err = req.merge_json(br#"{"gas":"not-hex"}"#).unwrap_err();
    assert!(err.is_malformed());
    assert_eq!(req.value, Some(U256::from(100)));
    assert_eq!(req.gas, None);
}

#[test]
fn reencodes_legacy_document() {
    let req: CallRequest = serde_json::from_str(
        r#"{
            "from":"0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
            "input":"0x8b1329e0",
            "to":"0x5fbdb2315678afecb367f032d93f642f64180aa3"
        }"#,
    )
    .unwrap();
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["data"], json!("0x8b1329e0"));
    assert!(value.get("input").is_none());
    assert_eq!(value["gas"], Value::Null);
    assert_eq!(CallRequest::decode(&req.encode().unwrap()).unwrap(), req);
}

#[test]
fn accepts_chain_id_in_any_case() {
    let req = CallRequest::decode(br#"{"chainID":"0x1"}"#).unwrap();
    assert_eq!(req.chain_id, Some(U256::from(1)));
    let value = req.to_json_value().unwrap();
    assert_eq!(value["chainId"], json!("0x1"));
    assert!(value.get("chainID").is_none());
}
