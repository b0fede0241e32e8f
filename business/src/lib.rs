pub mod application {
    pub mod account {
        pub mod delete_profile;
        pub mod get_profile;
        pub mod login;
        pub mod register;
        pub mod update_profile;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
    pub mod order {
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod place;
        pub mod update_status;
    }
    pub mod wishlist {
        pub mod add;
        pub mod get_all;
        pub mod get_by_id;
        pub mod remove;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod account {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod delete_profile;
            pub mod get_profile;
            pub mod login;
            pub mod register;
            pub mod update_profile;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod order {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod place;
            pub mod update_status;
        }
    }
    pub mod wishlist {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add;
            pub mod get_all;
            pub mod get_by_id;
            pub mod remove;
        }
    }
}
