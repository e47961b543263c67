pub mod shared {
    pub mod infrastructure {
        pub mod event_observer;
        pub mod trace_context;
    }
}

pub mod modules {
    pub mod cart {
        pub mod core {
            pub mod cart;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod add_item {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_cart {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod empty_cart {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod health_check {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod cart_store;
                pub mod cart_store_in_memory;
            }
        }
    }
}

pub mod shell;
