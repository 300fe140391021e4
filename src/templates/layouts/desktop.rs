use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Sole Catalog" }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="site-header" {
                    a class="site-logo" href="/" { "Sole" b { "&" } "Catalog" }
                    nav class="site-nav" {
                        ul {
                            li { a href="/" { "Sale" } }
                            li { a href="/" { "New Releases" } }
                            li { a href="/" { "Men" } }
                            li { a href="/" { "Women" } }
                            li { a href="/" { "Kids" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
