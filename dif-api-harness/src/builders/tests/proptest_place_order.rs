use proptest::prelude::*;

use crate::models::{OrderLine, PaymentProfile, PlaceOrderRequest, ShippingAddress};

fn line_strategy() -> impl Strategy<Value = (String, i32)> {
    ("[A-Z0-9]{1,6}(-[A-Z0-9]{1,4}){0,2}", -10i32..500)
}

fn address_strategy() -> impl Strategy<Value = ShippingAddress> {
    (
        "[A-Za-z #&'.0-9]{0,24}",
        "[0-9]{1,5} [A-Za-z ]{1,16}",
        proptest::option::of("(Suite|Unit|Floor) [0-9]{1,4}"),
        "[A-Za-z ]{1,16}",
        "[A-Z]{2}",
        "[0-9]{5}(-[0-9]{4})?",
        "[A-Z]{2}",
        proptest::option::of("[0-9]{3}-[0-9]{3}-[0-9]{4}"),
    )
        .prop_map(|(customer, address, address2, city, state, zip, country, phone)| {
            ShippingAddress { customer, address, address2, city, state, zip, country, phone }
        })
}

fn payment_strategy() -> impl Strategy<Value = PaymentProfile> {
    prop_oneof![
        Just(PaymentProfile::account_default()),
        "[a-z0-9-]{1,16}".prop_map(PaymentProfile::stored),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_lines_preserve_count_and_order(
        lines in prop::collection::vec(line_strategy(), 0..20),
    ) {
        let request = lines
            .iter()
            .fold(PlaceOrderRequest::builder(), |b, (sku, qty)| b.add_line(sku.clone(), *qty))
            .build();

        prop_assert_eq!(request.lines.len(), lines.len());
        for (line, (sku, qty)) in request.lines.iter().zip(&lines) {
            prop_assert_eq!(&line.identifier, sku);
            prop_assert_eq!(line.qty, *qty);
        }
    }

    #[test]
    fn test_build_is_idempotent(
        distributor in "[a-z]{1,10}",
        po in proptest::option::of("[A-Z0-9-]{1,20}"),
        test_order in any::<bool>(),
    ) {
        let mut builder =
            PlaceOrderRequest::builder().distributor_id(distributor).test_order(test_order);
        if let Some(po) = po {
            builder = builder.po_number(po);
        }

        prop_assert_eq!(builder.build(), builder.build());
    }

    #[test]
    fn test_json_roundtrip(
        distributor in "[a-z]{0,10}",
        address in proptest::option::of(address_strategy()),
        method in "[0-9A-Z]{1,3}",
        autoselect in any::<bool>(),
        warehouses in proptest::option::of(prop::collection::vec("[A-Z]{2,3}", 0..4)),
        po in proptest::option::of("[A-Z0-9-]{1,20}"),
        email in proptest::option::of("[a-z]{1,8}@example\\.com"),
        test_order in any::<bool>(),
        lines in prop::collection::vec(line_strategy(), 0..5),
        payment in proptest::option::of(payment_strategy()),
    ) {
        let mut builder = PlaceOrderRequest::builder()
            .distributor_id(distributor)
            .shipping_method(method)
            .autoselect_warehouse(autoselect)
            .test_order(test_order)
            .lines(lines.into_iter().map(|(sku, qty)| OrderLine::new(sku, qty)).collect());
        if let Some(address) = address {
            builder = builder.shipping_address(address);
        }
        if let Some(warehouses) = warehouses {
            builder = builder.warehouse_codes(warehouses);
        }
        if let Some(po) = po {
            builder = builder.po_number(po);
        }
        if let Some(email) = email {
            builder = builder.email_confirmation(email);
        }
        if let Some(payment) = payment {
            builder = builder.payment_profile(payment);
        }
        let request = builder.build();

        let encoded = serde_json::to_string(&request).expect("encode");
        let decoded: PlaceOrderRequest = serde_json::from_str(&encoded).expect("decode");
        prop_assert_eq!(decoded, request);
    }
}
