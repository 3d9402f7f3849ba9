pub mod application {
    pub mod recipe {
        pub mod generate;
    }
    pub mod tunnel {
        pub mod publish;
    }
}

pub mod domain {
    pub mod logger;
    pub mod recipe {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod generate;
        }
    }
    pub mod tunnel {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod publish;
        }
    }
}
