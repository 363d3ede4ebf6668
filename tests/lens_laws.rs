//! Property-based tests for Lens laws.
//!
//! - **GetPut Law**: `lens.set(source, lens.get(&source).clone()) == source`
//! - **PutGet Law**: `lens.get(&lens.set(source, value)) == &value`
//! - **PutPut Law**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`

use fpkit::either::Either;
use fpkit::lens;
use fpkit::optics::{FunctionLens, Lens};
use fpkit::option::OptionExt;
use proptest::prelude::*;

#[derive(Clone, PartialEq, Debug)]
struct Endpoint {
    host: String,
    port: u16,
}

#[derive(Clone, PartialEq, Debug)]
struct Service {
    name: String,
    endpoint: Endpoint,
}

fn endpoint_strategy() -> impl Strategy<Value = Endpoint> {
    ("[a-z]{1,10}", any::<u16>()).prop_map(|(host, port)| Endpoint { host, port })
}

fn service_strategy() -> impl Strategy<Value = Service> {
    ("[a-z]{1,10}", endpoint_strategy()).prop_map(|(name, endpoint)| Service { name, endpoint })
}

// =============================================================================
// Field lenses
// =============================================================================

proptest! {
    #[test]
    fn prop_port_get_put_law(endpoint in endpoint_strategy()) {
        let port = lens!(Endpoint, port);
        let value = *port.get(&endpoint);
        prop_assert_eq!(port.set(endpoint.clone(), value), endpoint);
    }

    #[test]
    fn prop_port_put_get_law(endpoint in endpoint_strategy(), value in any::<u16>()) {
        let port = lens!(Endpoint, port);
        let updated = port.set(endpoint, value);
        prop_assert_eq!(*port.get(&updated), value);
    }

    #[test]
    fn prop_host_put_put_law(endpoint in endpoint_strategy(), first in "[a-z]{1,5}", second in "[a-z]{1,5}") {
        let host = lens!(Endpoint, host);
        let twice = host.set(host.set(endpoint.clone(), first), second.clone());
        prop_assert_eq!(twice, host.set(endpoint, second));
    }

    #[test]
    fn prop_function_lens_matches_macro(endpoint in endpoint_strategy(), value in any::<u16>()) {
        let by_hand = FunctionLens::new(
            |endpoint: &Endpoint| &endpoint.port,
            |endpoint: Endpoint, port: u16| Endpoint { port, ..endpoint },
        );
        let by_macro = lens!(Endpoint, port);
        prop_assert_eq!(by_hand.set(endpoint.clone(), value), by_macro.set(endpoint, value));
    }
}

// =============================================================================
// Composed lenses
// =============================================================================

proptest! {
    #[test]
    fn prop_composed_get_put_law(service in service_strategy()) {
        let port = lens!(Service, endpoint).compose(lens!(Endpoint, port));
        let value = *port.get(&service);
        prop_assert_eq!(port.set(service.clone(), value), service);
    }

    #[test]
    fn prop_composed_put_get_law(service in service_strategy(), value in any::<u16>()) {
        let port = lens!(Service, endpoint).compose(lens!(Endpoint, port));
        let updated = port.set(service.clone(), value);
        prop_assert_eq!(*port.get(&updated), value);
        prop_assert_eq!(updated.name, service.name);
        prop_assert_eq!(updated.endpoint.host, service.endpoint.host);
    }

    #[test]
    fn prop_composed_put_put_law(service in service_strategy(), first in "[a-z]{1,5}", second in "[a-z]{1,5}") {
        let host = lens!(Service, endpoint).compose(lens!(Endpoint, host));
        let twice = host.set(host.set(service.clone(), first), second.clone());
        prop_assert_eq!(twice, host.set(service, second));
    }

    #[test]
    fn prop_composed_get_reads_through(service in service_strategy()) {
        let host = lens!(Service, endpoint).compose(lens!(Endpoint, host));
        prop_assert_eq!(host.get(&service), &service.endpoint.host);
    }

    #[test]
    fn prop_modify_is_get_then_set(service in service_strategy()) {
        let port = lens!(Service, endpoint).compose(lens!(Endpoint, port));
        let expected = port.set(service.clone(), port.get(&service).wrapping_add(1));
        prop_assert_eq!(port.modify(service, |p| p.wrapping_add(1)), expected);
    }
}

// =============================================================================
// Lens-based do-notation agrees with the lens itself
// =============================================================================

proptest! {
    #[test]
    fn prop_let_to_l_is_set(service in service_strategy(), value in any::<u16>()) {
        let port = lens!(Service, endpoint).compose(lens!(Endpoint, port));
        let through_either = Either::<String, _>::do_(service.clone()).let_to_l(&port, value);
        let through_option = Some(service.clone()).let_to_l(&port, value);
        let expected = port.set(service, value);

        prop_assert_eq!(through_either, Either::Right(expected.clone()));
        prop_assert_eq!(through_option, Some(expected));
    }

    #[test]
    fn prop_let_l_is_modify_ref(service in service_strategy()) {
        let host = lens!(Service, endpoint).compose(lens!(Endpoint, host));
        let upper = |h: &String| h.to_uppercase();
        let through_either = Either::<String, _>::do_(service.clone()).let_l(&host, upper);
        prop_assert_eq!(through_either, Either::Right(host.modify_ref(service, upper)));
    }
}
