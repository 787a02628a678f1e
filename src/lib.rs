pub mod shared {
    pub mod core {
        pub mod api_response;
        pub mod day_of_week;
        pub mod time_of_day;
    }
    pub mod infrastructure {
        pub mod identity_provider;
    }
}

pub mod modules {
    pub mod restaurants {
        pub mod core {
            pub mod codes;
            pub mod errors;
            pub mod restaurant;
            pub mod schedule;
            pub mod staff;
            pub mod table;
        }
        pub mod use_cases {
            pub mod visible_restaurant;
            pub mod create_restaurant {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_restaurants {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_restaurant {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_schedule {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_schedules {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod delete_schedule {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod check_opening_status {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_staff {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_staff {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_table {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_tables {
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod responses;
            }
            pub mod outbound {
                pub mod restaurant_store;
                pub mod restaurant_store_in_memory;
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures;

    pub mod e2e {
        pub mod schedule_admission_tests;
    }
}
