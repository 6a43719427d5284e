pub mod shared {
    pub mod infrastructure {
        pub mod game_store;
    }
}

pub mod modules {
    pub mod games {
        pub mod core {
            pub mod board;
            pub mod game;
            pub mod moves;
            pub mod player;
        }
        pub mod application {
            pub mod errors;
        }
        pub mod use_cases {
            pub mod create_game {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_game {
                pub mod handler;
                pub mod view;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod make_move {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
