//! Simple example using url::Url as keys in a radix trie
use radix_mutable::Trie;
use url::Url;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create a new trie for URL keys and string values
    let mut url_trie = Trie::new();

    // Create some example URLs
    let home = Url::parse("https://example.com/")?;
    let about = Url::parse("https://example.com/about")?;
    let contact = Url::parse("https://example.com/contact")?;
    let blog = Url::parse("https://example.com/blog")?;
    let blog_post = Url::parse("https://example.com/blog/first-post")?;

    // Url derefs to str, so its serialization is the trie key
    url_trie.insert(home.as_str(), "Home page".to_string());
    url_trie.insert(about.as_str(), "About us".to_string());
    url_trie.insert(contact.as_str(), "Contact info".to_string());
    url_trie.insert(blog.as_str(), "Blog index".to_string());
    url_trie.insert(blog_post.as_str(), "First blog post".to_string());

    println!("{}", url_trie.dump());

    // Look up a page
    if let Some(title) = url_trie.find(blog_post.as_str()) {
        println!("{} -> {}", blog_post, title);
    }

    // Take the blog index down; the post stays reachable
    let removed = url_trie.remove(blog.as_str());
    println!("removed {:?}", removed);
    assert_eq!(url_trie.find(blog_post.as_str()).map(String::as_str), Some("First blog post"));
    assert_eq!(url_trie.len(), 4);

    url_trie.validate()?;
    Ok(())
}
