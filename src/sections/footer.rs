use leptos::prelude::*;

use crate::components::{ICON_GITHUB, ICON_LINKEDIN, ICON_TWITTER, Icon};

/// Footer with social links and the copyright line.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id="contact" class="footer">
            <div class="container">
                <div class="footer-social">
                    <a href="#" class="footer-link" aria-label="Twitter">
                        <Icon path=ICON_TWITTER/>
                    </a>
                    <a href="#" class="footer-link" aria-label="LinkedIn">
                        <Icon path=ICON_LINKEDIN/>
                    </a>
                    <a href="#" class="footer-link" aria-label="GitHub">
                        <Icon path=ICON_GITHUB/>
                    </a>
                </div>
                <p class="footer-copyright">"© 2025 Pixel2Test. All rights reserved."</p>
            </div>
        </footer>
    }
}
