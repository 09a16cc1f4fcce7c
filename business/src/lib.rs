pub mod application {
    pub mod catalog {
        pub mod load;
    }
    pub mod comment {
        pub mod add;
        pub mod list;
    }
    pub mod controller;
    pub mod recipe {
        pub mod find;
        pub mod vote;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod load;
        }
    }
    pub mod comment {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod add;
            pub mod list;
        }
    }
    pub mod controller {
        pub mod action;
        pub mod messages;
        pub mod reducer;
        pub mod state;
    }
    pub mod recipe {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod find;
            pub mod vote;
        }
    }
    pub mod selection {
        pub mod errors;
        pub mod model;
        pub mod randomizer;
    }
}
