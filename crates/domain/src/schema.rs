// Mirrors the DDL in `infra::postgres::bootstrap`; keep the two in sync.

diesel::table! {
    plans (id) {
        id -> Int4,
        name -> Nullable<Text>,
        revenue -> Nullable<Int8>,
        orbit -> Nullable<Text>,
        payload -> Nullable<Jsonb>,
        created_at -> Timestamptz,
    }
}
