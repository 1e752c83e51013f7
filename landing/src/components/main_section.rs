//! Hero section - the above-the-fold block of the landing page.

use leptos::prelude::*;

use super::{Button, TopBar};
use crate::styles::MAIN_SECTION;

#[component]
pub fn MainSection() -> impl IntoView {
    let css = |key| MAIN_SECTION.class(key);

    view! {
        <section class=css("section")>
            <TopBar />

            <div class=css("heroContent")>
                <div class=css("leftColumn")>
                    <h1 class=css("title")>
                        "Discover the Best "
                        <br />
                        <span class=css("highlight")>"Deals & Offers"</span>
                    </h1>
                    <p class=css("description")>
                        "Shop the latest trends and get exclusive discounts on your favorite brands."
                    </p>
                    <div class=css("heroActions")>
                        <Button variant="offer" size="large">"Get 50% Off"</Button>
                        <Button variant="secondary" size="large">"Explore Now"</Button>
                    </div>
                </div>

                <div class=css("rightColumn")>
                    <div class=css("imagePlaceholder")>"Hero Image"</div>
                </div>
            </div>
        </section>
    }
}
