use callreq_types::{AccessList, AccessListItem, Address, B256, Bytes, CallRequest, U256};
use proptest::{collection::vec, option, prelude::*};

fn arb_u256() -> impl Strategy<Value = U256> {
    any::<[u64; 4]>().prop_map(U256::from_limbs)
}

fn arb_address() -> impl Strategy<Value = Address> {
    any::<[u8; 20]>().prop_map(Address::from)
}

fn arb_access_list() -> impl Strategy<Value = AccessList> {
    vec(
        (arb_address(), vec(any::<[u8; 32]>().prop_map(B256::from), 0..3))
            .prop_map(|(address, storage_keys)| AccessListItem { address, storage_keys }),
        0..3,
    )
    .prop_map(AccessList)
}

prop_compose! {
    fn arb_request()(
        from in option::of(arb_address()),
        to in option::of(arb_address()),
        gas in option::of(any::<u64>()),
        gas_price in option::of(arb_u256()),
        max_fee_per_gas in option::of(arb_u256()),
        max_priority_fee_per_gas in option::of(arb_u256()),
        value in option::of(arb_u256()),
        nonce in option::of(any::<u64>()),
        data in option::of(vec(any::<u8>(), 0..64).prop_map(Bytes::from)),
        access_list in option::of(arb_access_list()),
        chain_id in option::of(arb_u256()),
    ) -> CallRequest {
        CallRequest {
            from,
            to,
            gas,
            gas_price,
            max_fee_per_gas,
            max_priority_fee_per_gas,
            value,
            nonce,
            input: data.into(),
            access_list,
            chain_id,
        }
    }
}

proptest! {
    #[test]
    fn decode_inverts_encode(req in arb_request()) {
        let encoded = req.encode().unwrap();
        let decoded = CallRequest::decode(&encoded).unwrap();
        prop_assert_eq!(decoded, req);
    }

    #[test]
    fn legacy_input_roundtrips_as_data(bytes in vec(any::<u8>(), 0..64)) {
        let req = CallRequest::default().with_legacy_input(bytes.clone());
        let decoded = CallRequest::decode(&req.encode().unwrap()).unwrap();
        prop_assert_eq!(decoded, CallRequest::default().with_data(bytes));
    }
}
