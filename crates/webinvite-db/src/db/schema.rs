// Table definitions mirroring the hosted backend's tables.

diesel::table! {
    weddings (id) {
        id -> Uuid,
        user_id -> Uuid,
        couple1_name -> Text,
        couple2_name -> Text,
        wedding_date -> Nullable<Date>,
        copyright_text -> Nullable<Text>,
        quote -> Nullable<Text>,
        quote_author -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    backgrounds (id) {
        id -> Uuid,
        wedding_id -> Uuid,
        image_url -> Nullable<Text>,
        opacity -> Int4,
        blur -> Int4,
        overlay_color -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    events (id) {
        id -> Uuid,
        wedding_id -> Uuid,
        title -> Text,
        event_time -> Nullable<Timestamptz>,
        address -> Text,
        description -> Nullable<Text>,
        latitude -> Nullable<Float8>,
        longitude -> Nullable<Float8>,
        marker_color -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    guests (id) {
        id -> Uuid,
        wedding_id -> Uuid,
        full_name -> Text,
        invitation_code -> Text,
        rsvp_status -> Text,
        meal_preference -> Nullable<Text>,
        allergies -> Nullable<Text>,
        dietary_restrictions -> Nullable<Text>,
        plus_one -> Bool,
        table_number -> Nullable<Int4>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    gifts (id) {
        id -> Uuid,
        wedding_id -> Uuid,
        name -> Text,
        description -> Text,
        price_range -> Text,
        priority -> Text,
        status -> Text,
        category -> Nullable<Text>,
        store_name -> Nullable<Text>,
        store_url -> Nullable<Text>,
        image_url -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    music (id) {
        id -> Uuid,
        wedding_id -> Uuid,
        file_path -> Text,
        volume -> Int4,
        autoplay -> Bool,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(backgrounds -> weddings (wedding_id));
diesel::joinable!(events -> weddings (wedding_id));
diesel::joinable!(guests -> weddings (wedding_id));
diesel::joinable!(gifts -> weddings (wedding_id));
diesel::joinable!(music -> weddings (wedding_id));

diesel::allow_tables_to_appear_in_same_query!(backgrounds, events, gifts, guests, music, weddings,);
