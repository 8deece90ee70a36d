pub mod modules {
    pub mod events {
        pub mod core {
            pub mod categorize;
            pub mod category;
            pub mod event;
        }
        pub mod use_cases {
            pub mod create_event {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_events {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod archive_event {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_event {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod event_store;
                pub mod event_store_in_memory;
            }
        }
        pub mod errors;
    }
}

pub mod shell;
