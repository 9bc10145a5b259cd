//! Test fixtures and constants.

/// A JSON Secret manifest.
pub const SECRET_JSON: &str = include_str!("../fixtures/secret.json");

/// The same Secret as YAML.
pub const SECRET_YAML: &str = include_str!("../fixtures/secret.yaml");

/// A `kind: List` whose Secrets sit under `items`, with no top-level `data`.
pub const SECRET_LIST_YAML: &str = "apiVersion: v1
kind: List
items:
- apiVersion: v1
  kind: Secret
  data:
    password: c2VjcmV0
metadata:
  resourceVersion: ''
";

/// `SECRET_JSON` decoded, keys sorted.
pub const DECODED_JSON: &str = r#"{
    "apiVersion": "v1",
    "data": {
        "app": "kubernetes secret decoder",
        "password": "secret"
    },
    "kind": "Secret",
    "metadata": {
        "name": "kubernetes secret decoder",
        "namespace": "ksd"
    },
    "type": "Opaque"
}
"#;

/// `SECRET_YAML` decoded, order preserved.
pub const DECODED_YAML: &str = "apiVersion: v1
data:
  password: secret
  app: kubernetes secret decoder
kind: Secret
metadata:
  name: kubernetes secret decoder
  namespace: ksd
type: Opaque
";

/// A Secret whose only value has broken padding.
pub const BAD_PADDING_JSON: &str = r#"{ "data": { "password": "c2VjcmV" } }"#;
