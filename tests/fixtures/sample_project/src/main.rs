fn main() {
    println!("Hello from the sample project!");
}
