// User directory page
use leptos::*;

use crate::api::ApiClient;
use crate::components::cards::UserCard;
use crate::components::layout::{EmptyState, LoadingSpinner, PageHeader};
use crate::types::User;

/// How many records of the source collection the page keeps.
const PAGE_SIZE: usize = 10;

#[component]
pub fn UsersPage() -> impl IntoView {
    let (users, set_users) = create_signal(Vec::<User>::new());
    let (loading, set_loading) = create_signal(true);

    // One best-effort fetch per mount. A response that arrives after the
    // page's reactive scope is disposed is discarded by try_set, so a slow
    // request cannot write into a torn-down view.
    spawn_local(async move {
        match ApiClient::default().list_users().await {
            Ok(fetched) => {
                let _ = set_users.try_set(first_page(fetched));
            }
            Err(err) => log::error!("failed to load users: {}", err),
        }
        let _ = set_loading.try_set(false);
    });

    let handle_delete = Callback::new(move |id: u32| {
        set_users.update(|list| remove_user(list, id));
    });

    view! {
        <div class="space-y-8">
            <PageHeader
                title="Users".to_string()
                description=Some("People from the JSONPlaceholder directory".to_string())
            />

            {move || {
                if loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else if users.with(Vec::is_empty) {
                    view! {
                        <EmptyState
                            title="No users".to_string()
                            description="The directory could not be loaded or is empty.".to_string()
                        />
                    }
                    .into_view()
                } else {
                    view! {
                        <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-4">
                            <For
                                each=move || users.get()
                                key=|user| user.id
                                children=move |user: User| {
                                    view! { <UserCard user=user on_delete=handle_delete /> }
                                }
                            />
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

/// Keeps the first PAGE_SIZE records in source order.
fn first_page(mut users: Vec<User>) -> Vec<User> {
    users.truncate(PAGE_SIZE);
    users
}

/// Removes the record with the matching id, if present. Relative order of
/// the remainder is untouched; an unknown id is a silent no-op.
fn remove_user(list: &mut Vec<User>, id: u32) {
    list.retain(|user| user.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Address, Company, Geo};

    fn sample_user(id: u32) -> User {
        User {
            id,
            name: format!("User {}", id),
            username: format!("user{}", id),
            email: format!("user{}@example.com", id),
            address: Address {
                street: "Kulas Light".to_string(),
                suite: "Apt. 556".to_string(),
                city: "Gwenborough".to_string(),
                zipcode: "92998-3874".to_string(),
                geo: Geo {
                    lat: "-37.3159".to_string(),
                    lng: "81.1496".to_string(),
                },
            },
            phone: "1-770-736-8031".to_string(),
            website: "example.org".to_string(),
            company: Company {
                name: "Romaguera-Crona".to_string(),
                catch_phrase: "Multi-layered client-server neural-net".to_string(),
                bs: "harness real-time e-markets".to_string(),
            },
        }
    }

    fn sample_users(ids: impl IntoIterator<Item = u32>) -> Vec<User> {
        ids.into_iter().map(sample_user).collect()
    }

    fn ids(list: &[User]) -> Vec<u32> {
        list.iter().map(|u| u.id).collect()
    }

    #[test]
    fn first_page_truncates_long_collections() {
        let page = first_page(sample_users(1..=12));
        assert_eq!(ids(&page), (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn first_page_keeps_short_collections_whole() {
        let page = first_page(sample_users(1..=3));
        assert_eq!(ids(&page), vec![1, 2, 3]);
    }

    #[test]
    fn first_page_preserves_source_order() {
        let page = first_page(sample_users([7, 3, 9, 1]));
        assert_eq!(ids(&page), vec![7, 3, 9, 1]);
    }

    #[test]
    fn remove_user_deletes_exactly_one_entry() {
        let mut list = sample_users(1..=10);
        remove_user(&mut list, 3);
        assert_eq!(ids(&list), vec![1, 2, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn remove_user_with_unknown_id_is_a_no_op() {
        let mut list = sample_users(1..=10);
        remove_user(&mut list, 3);
        let before = ids(&list);
        remove_user(&mut list, 99);
        assert_eq!(ids(&list), before);
        assert_eq!(list.len(), 9);
    }

    #[test]
    fn load_then_delete_scenario() {
        // 12 records arrive, the page keeps ten, then one delete lands.
        let mut list = first_page(sample_users(1..=12));
        assert_eq!(list.len(), 10);
        remove_user(&mut list, 3);
        assert_eq!(ids(&list), vec![1, 2, 4, 5, 6, 7, 8, 9, 10]);
        remove_user(&mut list, 99);
        assert_eq!(list.len(), 9);
    }
}
