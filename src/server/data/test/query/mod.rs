use chrono::NaiveDate;
use sea_orm::{DbBackend, DbErr, EntityTrait, QueryFilter, QueryTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::query::{fetch_page, page_select, Filter, ListOptions, SortOrder, MAX_LIMIT, MAX_PAGE},
    model::{
        review::{RatingFilter, ReviewListQuery, ReviewSortField},
        user::{UserListQuery, UserSortField},
    },
};

mod statement;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
