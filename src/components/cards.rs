// Card components
use leptos::*;

use crate::types::User;
use crate::utils::{avatar_url, mailto_href, tel_href, website_url};

/// One directory entry. The card owns its follow flag; membership in the
/// list is owned by the page, so delete only reports the id upward.
#[component]
pub fn UserCard(user: User, #[prop(into)] on_delete: Callback<u32>) -> impl IntoView {
    let (is_followed, set_is_followed) = create_signal(false);

    let id = user.id;
    let avatar = avatar_url(&user.name);
    let email_href = mailto_href(&user.email);
    let phone_href = tel_href(&user.phone);
    let site_href = website_url(&user.website);

    let toggle_follow = move |_| set_is_followed.update(|followed| *followed = !*followed);

    view! {
        <div class="bg-white overflow-hidden shadow rounded-lg border border-gray-200 p-6">
            <div class="flex justify-center">
                <img
                    class="h-24 w-24 rounded-full"
                    src=avatar
                    alt=user.name.clone()
                />
            </div>

            <div class="mt-4 flex items-center justify-center gap-1">
                <h2 class="text-lg font-semibold text-gray-900">{user.name.clone()}</h2>
                {move || is_followed.get().then(|| view! { <StarIcon /> })}
            </div>

            <div class="mt-4 space-y-2 text-sm text-gray-500">
                <a class="flex items-center gap-2 hover:text-gray-700" href=email_href>
                    <AtIcon />
                    <span class="truncate">{user.email.clone()}</span>
                </a>
                <a class="flex items-center gap-2 hover:text-gray-700" href=phone_href>
                    <PhoneIcon />
                    <span class="truncate">{user.phone.clone()}</span>
                </a>
                <a
                    class="flex items-center gap-2 hover:text-gray-700"
                    href=site_href
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <GlobeIcon />
                    <span class="truncate">{user.website.clone()}</span>
                </a>
            </div>

            <div class="mt-6 flex items-center justify-center gap-4">
                <button
                    type="button"
                    class="inline-flex w-full items-center justify-center gap-2 rounded-md bg-blue-600 px-3 py-2 text-sm font-medium text-white hover:bg-blue-700"
                    on:click=toggle_follow
                >
                    <UserPlusIcon />
                    {move || if is_followed.get() { "Unfollow" } else { "Follow" }}
                </button>
                <button
                    type="button"
                    class="inline-flex w-full items-center justify-center gap-2 rounded-md border border-blue-600 px-3 py-2 text-sm font-medium text-blue-600 hover:bg-blue-50"
                    on:click=move |_| on_delete.call(id)
                >
                    <TrashIcon />
                    "Delete"
                </button>
            </div>
        </div>
    }
}

#[component]
fn StarIcon() -> impl IntoView {
    view! {
        <svg class="h-5 w-5 text-yellow-400" fill="currentColor" viewBox="0 0 20 20">
            <path d="M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z" />
        </svg>
    }
}

#[component]
fn AtIcon() -> impl IntoView {
    view! {
        <svg class="h-5 w-5 flex-shrink-0" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="1.5">
            <path stroke-linecap="round" stroke-linejoin="round" d="M16.5 12a4.5 4.5 0 11-9 0 4.5 4.5 0 019 0zm0 0c0 1.657 1.007 3 2.25 3S21 13.657 21 12a9 9 0 10-2.636 6.364" />
        </svg>
    }
}

#[component]
fn PhoneIcon() -> impl IntoView {
    view! {
        <svg class="h-5 w-5 flex-shrink-0" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="1.5">
            <path stroke-linecap="round" stroke-linejoin="round" d="M2.25 6.75c0 8.284 6.716 15 15 15h2.25a2.25 2.25 0 002.25-2.25v-1.372c0-.516-.351-.966-.852-1.091l-4.423-1.106c-.44-.11-.902.055-1.173.417l-.97 1.293c-.282.376-.769.542-1.21.38a12.035 12.035 0 01-7.143-7.143c-.162-.441.004-.928.38-1.21l1.293-.97c.363-.271.527-.734.417-1.173L6.963 3.102a1.125 1.125 0 00-1.091-.852H4.5A2.25 2.25 0 002.25 4.5v2.25z" />
        </svg>
    }
}

#[component]
fn GlobeIcon() -> impl IntoView {
    view! {
        <svg class="h-5 w-5 flex-shrink-0" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="1.5">
            <path stroke-linecap="round" stroke-linejoin="round" d="M12 21a9.004 9.004 0 008.716-6.747M12 21a9.004 9.004 0 01-8.716-6.747M12 21c2.485 0 4.5-4.03 4.5-9S14.485 3 12 3s-4.5 4.03-4.5 9 2.015 9 4.5 9zm-9-9h18" />
        </svg>
    }
}

#[component]
fn UserPlusIcon() -> impl IntoView {
    view! {
        <svg class="h-4 w-4" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="1.5">
            <path stroke-linecap="round" stroke-linejoin="round" d="M18 7.5v3m0 0v3m0-3h3m-3 0h-3m-2.25-4.125a3.375 3.375 0 11-6.75 0 3.375 3.375 0 016.75 0zM3 19.235v-.11a6.375 6.375 0 0112.75 0v.109A12.318 12.318 0 019.374 21c-2.331 0-4.512-.645-6.374-1.766z" />
        </svg>
    }
}

#[component]
fn TrashIcon() -> impl IntoView {
    view! {
        <svg class="h-4 w-4" fill="none" viewBox="0 0 24 24" stroke="currentColor" stroke-width="1.5">
            <path stroke-linecap="round" stroke-linejoin="round" d="M14.74 9l-.346 9m-4.788 0L9.26 9m9.968-3.21c.342.052.682.107 1.022.166m-1.022-.165L18.16 19.673a2.25 2.25 0 01-2.244 2.077H8.084a2.25 2.25 0 01-2.244-2.077L5.772 5.79m13.456 0a48.108 48.108 0 00-3.478-.397m-12 .562c.34-.059.68-.114 1.022-.165m0 0a48.11 48.11 0 013.478-.397m7.5 0v-.916c0-1.18-.91-2.164-2.09-2.201a51.964 51.964 0 00-3.32 0c-1.18.037-2.09 1.022-2.09 2.201v.916m7.5 0a48.667 48.667 0 00-7.5 0" />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use leptos::*;

    // The follow flag lives in a per-card signal; these exercise the same
    // update the card's handler performs.

    #[test]
    fn follow_toggle_flips_and_restores() {
        let runtime = create_runtime();

        let (is_followed, set_is_followed) = create_signal(false);
        set_is_followed.update(|followed| *followed = !*followed);
        assert!(is_followed.get_untracked());
        set_is_followed.update(|followed| *followed = !*followed);
        assert!(!is_followed.get_untracked());

        runtime.dispose();
    }

    #[test]
    fn follow_flags_are_independent_across_cards() {
        let runtime = create_runtime();

        let (first, set_first) = create_signal(false);
        let (second, _set_second) = create_signal(false);
        set_first.update(|followed| *followed = !*followed);
        assert!(first.get_untracked());
        assert!(!second.get_untracked());

        runtime.dispose();
    }
}
