//! The static pattern table.
//!
//! Entries are listed in [`PatternId::ALL`] order so that a lookup is a plain
//! index. `test_table_order_matches_ids` guards that alignment.

use crate::domain::{Category, Icon, PatternEntry, PatternId};

static ENTRIES: [PatternEntry; 22] = [
    PatternEntry {
        id: PatternId::Singleton,
        category: Category::Creational,
        title: "Singleton",
        icon: Icon::Database,
        what: "A creational pattern that restricts a class to a single instance, ensuring that ONE and ONLY ONE object of that type exists throughout the application's lifecycle, accessible globally.",
        how: "By making the class constructor private (preventing `new Class()`) and providing a static method (like `getInstance()`). This method checks if the object exists; if not, it creates it. If it does, it returns the existing reference.",
        why: "Crucial for controlling access to shared resources like database connections, file systems, or printer spoolers. It prevents data corruption and saves memory by avoiding unnecessary object creation.",
        scenario: "Database Connection Pool: Instead of opening 100 separate slow connections for 100 users, the Singleton manages a shared pool. Every part of the app asks the Singleton for a connection, ensuring efficiency.",
    },
    PatternEntry {
        id: PatternId::Factory,
        category: Category::Creational,
        title: "Factory Method",
        icon: Icon::Box,
        what: "A pattern that provides an interface for creating objects in a superclass, but allows subclasses or a specific method to alter the type of objects that will be created.",
        how: "Instead of calling `new ConcreteClass()` directly, the client calls a factory method (e.g., `createPayment(type)`). This method contains the switch logic to decide which specific class (Stripe, PayPal) to instantiate and return.",
        why: "It decouples your code from specific classes. If you need to add a new payment method later, you only update the Factory logic, not every place in your app where payments are processed.",
        scenario: "Payment Gateway: An e-commerce site supports Credit Cards, PayPal, and Crypto. When a user selects a method, the Factory generates the correct processor object dynamically without the checkout page needing to know the details.",
    },
    PatternEntry {
        id: PatternId::AbstractFactory,
        category: Category::Creational,
        title: "Abstract Factory",
        icon: Icon::Grid,
        what: "A creational pattern that lets you produce families of related objects without specifying their concrete classes. It acts as a super-factory that creates other factories.",
        how: "You define an interface for creating all distinct products of the product family (e.g., `createButton`, `createCheckbox`). Then you create separate factory classes (e.g., `DarkThemeFactory`, `LightThemeFactory`) that implement this interface.",
        why: "Ensures that products you use together match each other. It prevents the error of mixing a Windows-style button with a MacOS-style scrollbar, enforcing consistency across product families.",
        scenario: "Cross-Platform UI Framework: An app needs to run on Windows, Mac, and Linux. The Abstract Factory creates the correct set of UI components (Buttons, Windows, Scrollbars) for the specific OS detected at runtime.",
    },
    PatternEntry {
        id: PatternId::Builder,
        category: Category::Creational,
        title: "Builder",
        icon: Icon::Layers,
        what: "A creational pattern designed to construct complex objects step-by-step. It allows you to produce different types and representations of an object using the same construction code.",
        how: "You separate the construction of an object from its representation. Instead of a massive constructor with 10 confusing parameters, you use a Builder object with readable methods like `.setCPU()`, `.setRAM()`, and finally `.build()`.",
        why: "Solves the 'Telescoping Constructor' problem. It makes code readable and less error-prone when creating objects with many optional configurations (like a computer with optional GPU, WiFi, or Storage).",
        scenario: "Server Configurator: A user wants to buy a custom server. They start with a base chassis and sequentially add a specific CPU, amount of RAM, and disk storage. The Builder assembles this custom configuration into a final object.",
    },
    PatternEntry {
        id: PatternId::Prototype,
        category: Category::Creational,
        title: "Prototype",
        icon: Icon::Copy,
        what: "A pattern that lets you copy existing objects without making your code dependent on their classes. It allows creating new instances by cloning a 'prototype' instance.",
        how: "The object implements a `clone()` method. When you need a new object, instead of running a costly initialization process (like booting an OS), you essentially say 'copy memory from A to B'. It performs a deep or shallow copy.",
        why: "Performance optimization. Creating an object from scratch might involve heavy database queries or complex calculations. Cloning a pre-configured template is instant.",
        scenario: "Virtual Machine Cloning: In cloud computing, booting a fresh Windows server takes minutes. The Prototype pattern takes a 'snapshot' of a running server and clones it instantly to scale up traffic handling.",
    },
    PatternEntry {
        id: PatternId::Adapter,
        category: Category::Structural,
        title: "Adapter",
        icon: Icon::Puzzle,
        what: "A structural pattern that allows objects with incompatible interfaces to collaborate. It acts as a bridge between two systems that speak different languages.",
        how: "You wrap the incompatible object (the 'Adaptee') inside an Adapter class. The Adapter translates calls from the modern interface into a format the legacy object understands, and converts the response back.",
        why: "It saves you from rewriting mostly working legacy code. It allows modern applications to communicate with old databases, 3rd-party libraries, or hardware drivers that you cannot modify.",
        scenario: "Legacy Integration: Your modern React frontend expects JSON data, but the company's old 1990s database outputs XML. An Adapter sits in the middle, transparently converting XML to JSON so the frontend doesn't crash.",
    },
    PatternEntry {
        id: PatternId::Bridge,
        category: Category::Structural,
        title: "Bridge",
        icon: Icon::Anchor,
        what: "A structural pattern that lets you split a large class or a set of closely related classes into two separate hierarchies—abstraction and implementation—which can be developed independently.",
        how: "Instead of inheritance explosion (e.g., `SQLUserRepo`, `MongoUserRepo`, `SQLProductRepo`), you create two hierarchies: Repository (Abstraction) and StorageDriver (Implementation). The Repository holds a reference to a Driver.",
        why: "Prevents the 'Cartesian Product' complexity explosion. It allows you to switch the underlying database implementation (SQL vs NoSQL) without changing the high-level business logic code.",
        scenario: "Database ORM: The 'User Repository' (Abstraction) handles high-level logic like 'saveUser'. It delegates the low-level query generation to a 'Driver' (Implementation). You can switch drivers (Postgres to Mongo) without rewriting the Repository.",
    },
    PatternEntry {
        id: PatternId::Composite,
        category: Category::Structural,
        title: "Composite",
        icon: Icon::Network,
        what: "A structural pattern that lets you compose objects into tree structures and then work with these structures as if they were individual objects.",
        how: "You create a common interface (Component) for both individual objects (Leaves) and groups of objects (Composites). The Composite delegates work to its children, who might be Leaves or other Composites.",
        why: "Simplifies client code when dealing with recursive structures. You can call `folder.getSize()` and it automatically sums up the sizes of all files and sub-folders inside, without the client needing to know the depth.",
        scenario: "File System Explorer: A File is a leaf. A Folder is a composite that contains Files and other Folders. Operations like 'Delete' or 'Get Size' apply uniformly to both single files and entire directory trees.",
    },
    PatternEntry {
        id: PatternId::Decorator,
        category: Category::Structural,
        title: "Decorator",
        icon: Icon::Shield,
        what: "A pattern that lets you attach new behaviors to objects by placing these objects inside special wrapper objects that contain the behaviors.",
        how: "You create a set of decorator classes (like `EncryptionDecorator`, `CompressionDecorator`) that implement the same interface as the core object. You 'wrap' the core object in these layers. Data passes through, getting modified at each step.",
        why: "Provides a flexible alternative to subclassing for extending functionality. You can mix and match behaviors at runtime (e.g., enable Encryption but disable Compression) without creating a chaotic inheritance tree.",
        scenario: "Data Stream Processing: A raw data stream needs to be secure. We wrap it in a 'Compression' layer to shrink it, and then an 'Encryption' layer to lock it. The core stream object doesn't know about these layers.",
    },
    PatternEntry {
        id: PatternId::Facade,
        category: Category::Structural,
        title: "Facade",
        icon: Icon::LayoutTemplate,
        what: "A structural pattern that provides a simplified, higher-level interface to a library, a framework, or any other complex set of classes.",
        how: "You create a Facade class that sits above the messy subsystems. It exposes simple methods like `deployApp()`. Internally, this method triggers the complex sequence: compiler, linker, uploader, and server restarter.",
        why: "Reduces complexity for the consumer. Frontend developers don't need to be DevOps experts; they just press the 'Deploy' button provided by the Facade.",
        scenario: "One-Click Cloud Deploy: A deployment process involves compiling code, running unit tests, building Docker images, and pushing to AWS. The Facade wraps all this into a single function call.",
    },
    PatternEntry {
        id: PatternId::Flyweight,
        category: Category::Structural,
        title: "Flyweight",
        icon: Icon::Package,
        what: "A structural pattern that lets you fit more objects into the available amount of RAM by sharing common parts of state between multiple objects instead of keeping all of the data in each object.",
        how: "You separate object state into 'Intrinsic' (shared, immutable, e.g., texture of a bullet) and 'Extrinsic' (unique, mutable, e.g., coordinate of a bullet). The shared state is stored in a Flyweight object referenced by thousands of contexts.",
        why: "Essential for game development and graphical applications. Without it, rendering 10,000 asteroids would crash the browser due to memory limits. With it, you only store the asteroid image once.",
        scenario: "Particle System in Games: A game needs to render 10,000 bullets. Instead of loading the bullet sprite 10,000 times, we load it once (Flyweight) and re-use it, only storing the X/Y coordinates (Context) for each instance.",
    },
    PatternEntry {
        id: PatternId::Proxy,
        category: Category::Structural,
        title: "Proxy",
        icon: Icon::ShieldCheck,
        what: "A pattern that lets you provide a substitute or placeholder for another object. A proxy controls access to the original object, allowing you to perform something either before or after the request gets through.",
        how: "The Proxy creates an object that looks identical to the real service. When a client calls it, the Proxy intercepts the call. It can check credentials, check cache, or check rate limits. If allowed, it forwards the call to the real object.",
        why: "Essential for Security (blocking unauthorized access), Performance (caching results to avoid heavy calls), and Stability (rate limiting to prevent server crashes).",
        scenario: "API Rate Limiter: To prevent a hacker from spamming your server, a Proxy sits in front. It counts requests from an IP. If they exceed 5 per second, the Proxy blocks them immediately; the real server never sees the traffic.",
    },
    PatternEntry {
        id: PatternId::ChainOfResponsibility,
        category: Category::Behavioral,
        title: "Chain of Resp.",
        icon: Icon::List,
        what: "A behavioral design pattern that lets you pass requests along a chain of handlers. Upon receiving a request, each handler decides either to process the request or to pass it to the next handler in the chain.",
        how: "You link handler objects into a chain. The client sends the request to the first handler. That handler tries to fix it. If it can't, it calls `next.handle()`. This continues until someone handles it or the chain ends.",
        why: "Decouples the sender of a request from its receivers. You can dynamically change the chain order or add new handlers (e.g., adding a new 'Spam Filter' layer) without affecting the rest of the system.",
        scenario: "Customer Support System: A user ticket comes in. Level 1 Bot tries to answer. If it fails, it passes to Level 2 Junior Agent. If they can't solve it, it escalates to Level 3 Manager. The user just sees 'Ticket Solved'.",
    },
    PatternEntry {
        id: PatternId::Command,
        category: Category::Behavioral,
        title: "Command",
        icon: Icon::Terminal,
        what: "A pattern that turns a request into a stand-alone object that contains all information about the request. This transformation lets you pass requests as method arguments, delay or queue a request's execution, and support undoable operations.",
        how: "Instead of performing an action directly (like `account.withdraw()`), you create a `WithdrawCommand` object containing the amount and target. This object is pushed onto a 'History Stack'. To undo, you pop the stack and call the command's `undo()` method.",
        why: "It is the backbone of 'Undo/Redo' functionality, transactional systems, and job queues. It decouples the object that invokes the operation from the one that knows how to perform it.",
        scenario: "Bank Transaction Manager: You mistakenly transfer $500. Because the transfer was wrapped in a Command object, the system can simply call `undo()` on that specific transaction record to reverse the money flow.",
    },
    PatternEntry {
        id: PatternId::Iterator,
        category: Category::Behavioral,
        title: "Iterator",
        icon: Icon::ArrowRight,
        what: "A behavioral design pattern that lets you traverse elements of a collection without exposing its underlying representation (list, stack, tree, etc.).",
        how: "The collection provides a method `createIterator()`. This returns an object that knows how to traverse the collection (keeping track of the current position). The client just calls `.next()` repeatedly.",
        why: "It provides a standard way to loop through complex data structures. The client doesn't need to know if it's looping through an Array, a Linked List, or a Binary Tree; the Iterator interface is the same for all.",
        scenario: "Music Playlist: A user clicks 'Next Song'. They don't care if the playlist is shuffle-mode (Random Iterator) or sequential (Sequential Iterator). The button just calls `.next()` on whatever Iterator is active.",
    },
    PatternEntry {
        id: PatternId::Mediator,
        category: Category::Behavioral,
        title: "Mediator",
        icon: Icon::Users,
        what: "A behavioral design pattern that lets you reduce chaotic dependencies between objects. The pattern restricts direct communications between the objects and forces them to collaborate only via a mediator object.",
        how: "Components (Colleagues) do not reference each other. Instead, they send events to a central Mediator (Hub). The Hub decides who needs to know about this event and routes it accordingly.",
        why: "Prevents spaghetti code where every component knows about every other component. It transforms a Many-to-Many relationship web into a simple One-to-Many star topology.",
        scenario: "Air Traffic Control: Planes (Components) do not talk to each other to decide who lands first. They talk to the Tower (Mediator). The Tower tells Plane A to land and Plane B to circle, preventing crashes.",
    },
    PatternEntry {
        id: PatternId::Memento,
        category: Category::Behavioral,
        title: "Memento",
        icon: Icon::History,
        what: "A behavioral design pattern that lets you save and restore the previous state of an object without revealing the details of its implementation.",
        how: "The Originator (object to be saved) creates a 'Memento' object containing a snapshot of its internal state. This Memento is stored in a Caretaker (History list). To restore, the Memento is passed back to the Originator.",
        why: "Fundamental for implementing 'Save Game', 'Ctrl+Z' Undo, or Transaction Rollbacks. It ensures encapsulation isn't broken because only the Originator can read the Memento's contents.",
        scenario: "Text Editor History: Every time you type a sentence, the editor creates a Memento of the document state and pushes it to a stack. Pressing Ctrl+Z pops the stack and restores the text to that exact previous state.",
    },
    PatternEntry {
        id: PatternId::Observer,
        category: Category::Behavioral,
        title: "Observer",
        icon: Icon::Activity,
        what: "A behavioral design pattern that defines a subscription mechanism to notify multiple 'observer' objects about any events that happen to the object they are observing.",
        how: "A 'Subject' (the data source) maintains a list of subscribers. When its state changes, it iterates through this list and calls a standard `update()` method on every subscriber to pass the new data.",
        why: "Allows for a dynamic, event-driven architecture. Components can react to changes in real-time without the data source needing to know exactly who is listening or why.",
        scenario: "System Monitoring Dashboard: A central server monitor (Subject) tracks CPU and RAM usage. When usage spikes, it notifies the 'Graph Widget', 'Log Recorder', and 'Alert System' (Observers) simultaneously.",
    },
    PatternEntry {
        id: PatternId::State,
        category: Category::Behavioral,
        title: "State",
        icon: Icon::Wifi,
        what: "A behavioral pattern that lets an object alter its behavior when its internal state changes. It appears as if the object changed its class.",
        how: "The main object (Context) holds a reference to a 'State' object (e.g., `ConnectedState` or `DisconnectedState`). When you call `send()`, the Context delegates the work to the current State object. Changing the state means swapping this object.",
        why: "Removes massive, unreadable `switch` or `if-else` state machines. Each state's logic is safely encapsulated in its own class, making complex lifecycles (like TCP handshakes) manageable.",
        scenario: "TCP Connection Handshake: A connection behaves differently depending on whether it is 'Closed', 'Listening', or 'Established'. The 'Connect' button might start a handshake in one state, but do nothing in another.",
    },
    PatternEntry {
        id: PatternId::Strategy,
        category: Category::Behavioral,
        title: "Strategy",
        icon: Icon::GitBranch,
        what: "A pattern that lets you define a family of algorithms, put each of them into a separate class, and make their objects interchangeable.",
        how: "You define a common interface (e.g., `RoutingStrategy`). Then you create specific classes like `RoundRobin` or `LeastConnections`. The Load Balancer accepts any strategy and calls `.getNextServer()`, indifferent to which specific algorithm is being used.",
        why: "Lets you change the behavior of an object at runtime. A system admin can switch load balancing algorithms instantly based on traffic patterns without restarting the server or breaking the code.",
        scenario: "Load Balancer: A Load Balancer needs to distribute traffic. During the day, it uses 'Round Robin'. At night, when some servers are sleeping, it switches to 'Least Connections'. The Strategy pattern makes this switch seamless.",
    },
    PatternEntry {
        id: PatternId::TemplateMethod,
        category: Category::Behavioral,
        title: "Template Method",
        icon: Icon::FileText,
        what: "A behavioral design pattern that defines the skeleton of an algorithm in the superclass but lets subclasses override specific steps of the algorithm without changing its structure.",
        how: "A base class defines a method like `deployPipeline()` which calls `pullCode()`, `build()`, `test()`. Subclasses (e.g., `NodeJSPipeline`, `JavaPipeline`) override `build` and `test` with their specific commands (npm vs maven) but keep the overall sequence intact.",
        why: "Prevents code duplication when two algorithms are 90% identical but differ in small details. It enforces a strict structure while allowing flexibility in implementation.",
        scenario: "CI/CD Pipeline: You have a build pipeline for Node, Go, and Java. The steps 'Clone', 'Build', 'Deploy' are the same. The template defines the flow, while subclasses implement the specific 'npm install' or 'go build' commands.",
    },
    PatternEntry {
        id: PatternId::Visitor,
        category: Category::Behavioral,
        title: "Visitor",
        icon: Icon::ExternalLink,
        what: "A behavioral design pattern that lets you separate algorithms from the objects on which they operate.",
        how: "You add a single method `accept(visitor)` to your object classes. You then create external 'Visitor' classes (like `XMLExportVisitor`, `JSONExportVisitor`). The object calls `visitor.visit(this)`, passing itself to the visitor.",
        why: "Allows you to add new operations (like Exporting, Reporting, Linting) to existing classes without modifying them. This follows the Open/Closed Principle perfectly.",
        scenario: "Shape Exporter: You have a drawing app with Circle, Square, and Triangle classes. You want to export to XML. Instead of changing every shape class to add `.toXML()`, you create an `XMLVisitor` that visits the shapes and generates the string.",
    },
];

/// All entries in catalog order.
pub fn entries() -> &'static [PatternEntry] {
    &ENTRIES
}

/// Look up the entry of a pattern. Total over [`PatternId`].
pub fn lookup(id: PatternId) -> &'static PatternEntry {
    &ENTRIES[id.index()]
}

/// Entries of one category, in catalog order.
pub fn by_category(category: Category) -> impl Iterator<Item = &'static PatternEntry> {
    ENTRIES.iter().filter(move |entry| entry.category == category)
}
