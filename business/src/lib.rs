pub mod application {
    pub mod analysis {
        pub mod run;
    }
}

pub mod domain {
    pub mod logger;
    pub mod analysis {
        pub mod errors;
        pub mod model;
        pub mod prompts;
        pub mod services;
        pub mod use_cases {
            pub mod run;
        }
    }
    pub mod shared {
        pub mod value_objects;
    }
}
